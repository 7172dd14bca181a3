use room_reservations::data_gen::generate_smooth_reservations;
use room_reservations::{ReservationIndex, ReservationSystem};

fn main() -> room_reservations::Result<()> {
    let mut system = ReservationSystem::new();

    system.insert("20-12-2023", 101)?;
    system.insert("23-12-2023", 301)?;
    system.insert("30-12-2023", 102)?;

    // false, room 101 is taken on that date
    println!("{}", system.check_availability("20-12-2023", 101)?);
    // true, nothing booked
    println!("{}", system.check_availability("11-11-2023", 103)?);

    system.cancel("23-12-2023", 301)?;

    for record in system.list_by_room(101) {
        println!("{}", system.format_record(&record));
    }
    system.index().pretty_print();

    if let Err(e) = system.insert("2023-12-20", 101) {
        println!("rejected: {}", e);
    }

    let index: ReservationIndex = generate_smooth_reservations(Some(200)).into_iter().collect();
    println!(
        "random index: {} reservations, height {}, room 7 has {} bookings",
        index.len(),
        index.height(),
        index.list_by_room(7).len()
    );

    Ok(())
}
