use std::path::Path;

use anyhow::Context;

use crate::model::Booking;

/// Dump a booking list to CSV, one row per booking, for spreadsheets.
pub fn write_bookings_csv(path: &Path, bookings: &[Booking]) -> anyhow::Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("cannot write {}", path.display()))?;
    writer.write_record([
        "id",
        "vehicle",
        "customer",
        "start_date",
        "end_date",
        "status",
        "needs_driver",
        "total_price",
    ])?;
    for booking in bookings {
        writer.write_record([
            booking.id.as_str(),
            booking.vehicle_label(),
            booking
                .customer
                .as_ref()
                .map(|c| c.name.as_str())
                .unwrap_or(""),
            &booking
                .start_date
                .map(|d| d.to_rfc3339())
                .unwrap_or_default(),
            &booking.end_date.map(|d| d.to_rfc3339()).unwrap_or_default(),
            booking.status.as_str(),
            if booking.needs_driver { "yes" } else { "no" },
            &booking
                .total_price
                .map(|p| format!("{p:.2}"))
                .unwrap_or_default(),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{BookingStatus, VehicleSummary};

    #[test]
    fn writes_header_and_rows() {
        let path = std::env::temp_dir().join(format!(
            "rentals-cli-export-{}.csv",
            std::process::id()
        ));
        let booking = Booking {
            id: "b1".into(),
            status: BookingStatus::Completed,
            vehicle: Some(VehicleSummary {
                id: "v1".into(),
                model: "Swift".into(),
                registration: None,
                price: None,
            }),
            total_price: Some(90.0),
            ..Booking::default()
        };
        write_bookings_csv(&path, &[booking]).unwrap();

        let raw = std::fs::read_to_string(&path).unwrap();
        let mut lines = raw.lines();
        assert!(lines.next().unwrap().starts_with("id,vehicle,customer"));
        let row = lines.next().unwrap();
        assert!(row.contains("b1") && row.contains("Swift") && row.contains("completed"));
        assert!(row.contains("90.00"));
        std::fs::remove_file(&path).unwrap();
    }
}
