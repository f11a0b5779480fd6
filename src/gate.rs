//! Decides which actions a booking currently permits. The lifecycle
//! itself lives on the backend; these rules only mirror the status the
//! server last reported, so the worst a stale answer can cause is a
//! rejected request.

use crate::model::{Booking, BookingStatus, ConditionReportType};

/// Customer-side actions a booking can offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Action {
    CancelBooking,
    CancelDriverRequest,
    MakePayment,
    ReportBefore,
    ReportAfter,
    Rate,
}

impl Action {
    pub fn label(&self) -> &'static str {
        match self {
            Action::CancelBooking => "cancel",
            Action::CancelDriverRequest => "cancel-driver",
            Action::MakePayment => "pay",
            Action::ReportBefore => "report-condition (before)",
            Action::ReportAfter => "report-condition (after)",
            Action::Rate => "rate",
        }
    }
}

/// Actions offered to the assigned driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum DriverAction {
    ConfirmAssignment,
    ReportBefore,
    UpdateLocation,
    CompleteTrip,
    ReportAfter,
}

impl DriverAction {
    pub fn label(&self) -> &'static str {
        match self {
            DriverAction::ConfirmAssignment => "confirm",
            DriverAction::ReportBefore => "report (before)",
            DriverAction::UpdateLocation => "location update",
            DriverAction::CompleteTrip => "complete",
            DriverAction::ReportAfter => "report (after)",
        }
    }
}

/// The customer actions this booking permits right now.
///
/// Pure and total: a record with an unknown status or missing fields
/// yields an empty list, never an error. Payment is gated on
/// `completed`, not the retired `approved` rule.
pub fn permitted_actions(booking: &Booking) -> Vec<Action> {
    let mut actions = Vec::new();
    let has_before = booking.has_report(ConditionReportType::Before);
    let has_after = booking.has_report(ConditionReportType::After);

    match booking.status {
        BookingStatus::Pending => actions.push(Action::CancelBooking),
        BookingStatus::Approved => {
            if booking.needs_driver && booking.driver.is_none() {
                actions.push(Action::CancelDriverRequest);
            }
        }
        BookingStatus::PickupConfirmed => {
            if !has_before {
                actions.push(Action::ReportBefore);
            }
        }
        BookingStatus::Delivered => {
            if has_before && !has_after {
                actions.push(Action::ReportAfter);
            }
        }
        BookingStatus::Completed => {
            actions.push(Action::MakePayment);
            actions.push(Action::Rate);
        }
        BookingStatus::Assigned
        | BookingStatus::Paid
        | BookingStatus::Cancelled
        | BookingStatus::Rejected
        | BookingStatus::Unknown => {}
    }
    actions
}

/// The driver-side actions this booking permits right now.
pub fn driver_actions(booking: &Booking) -> Vec<DriverAction> {
    let mut actions = Vec::new();
    let has_before = booking.has_report(ConditionReportType::Before);
    let has_after = booking.has_report(ConditionReportType::After);

    match booking.status {
        BookingStatus::Assigned => actions.push(DriverAction::ConfirmAssignment),
        BookingStatus::PickupConfirmed => {
            if !has_before {
                actions.push(DriverAction::ReportBefore);
            }
            actions.push(DriverAction::UpdateLocation);
            actions.push(DriverAction::CompleteTrip);
        }
        BookingStatus::Delivered => {
            if has_before && !has_after {
                actions.push(DriverAction::ReportAfter);
            }
        }
        _ => {}
    }
    actions
}

/// True when the admin assignment screen should list this booking.
pub fn awaiting_driver_assignment(booking: &Booking) -> bool {
    booking.needs_driver
        && booking.driver.is_none()
        && booking.status == BookingStatus::Approved
        && booking.owner_approved
}

/// True when the owner approval screen should list this booking.
pub fn awaiting_owner_decision(booking: &Booking) -> bool {
    booking.status == BookingStatus::Pending
}

/// Why a condition report is not possible right now; shown to the user
/// when they ask for one anyway.
pub fn report_refusal(booking: &Booking) -> &'static str {
    if booking.has_report(ConditionReportType::Before)
        && booking.has_report(ConditionReportType::After)
    {
        "Both reports have been submitted."
    } else {
        "Cannot report at this stage. Please confirm pickup or complete delivery."
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ConditionReport, PersonSummary};

    fn booking(status: BookingStatus) -> Booking {
        Booking {
            id: "b1".into(),
            status,
            ..Booking::default()
        }
    }

    fn report(report_type: ConditionReportType) -> ConditionReport {
        ConditionReport {
            report_type,
            condition: "ok".into(),
            images: vec![],
            reported_by: None,
            created_at: None,
        }
    }

    fn driver() -> Option<PersonSummary> {
        Some(PersonSummary {
            id: "d1".into(),
            name: "Asha".into(),
            email: None,
        })
    }

    const ALL_STATUSES: [BookingStatus; 10] = [
        BookingStatus::Pending,
        BookingStatus::Approved,
        BookingStatus::Assigned,
        BookingStatus::PickupConfirmed,
        BookingStatus::Delivered,
        BookingStatus::Completed,
        BookingStatus::Paid,
        BookingStatus::Cancelled,
        BookingStatus::Rejected,
        BookingStatus::Unknown,
    ];

    #[test]
    fn pending_permits_only_cancellation() {
        assert_eq!(
            permitted_actions(&booking(BookingStatus::Pending)),
            vec![Action::CancelBooking]
        );
    }

    #[test]
    fn cancel_only_while_pending() {
        for status in ALL_STATUSES {
            let permitted = permitted_actions(&booking(status));
            assert_eq!(
                permitted.contains(&Action::CancelBooking),
                status == BookingStatus::Pending,
                "{status}"
            );
        }
    }

    #[test]
    fn driver_request_cancellable_until_assignment() {
        let mut b = booking(BookingStatus::Approved);
        b.needs_driver = true;
        assert_eq!(permitted_actions(&b), vec![Action::CancelDriverRequest]);

        b.driver = driver();
        assert!(permitted_actions(&b).is_empty());
    }

    #[test]
    fn no_driver_request_cancellation_without_request() {
        let b = booking(BookingStatus::Approved);
        assert!(permitted_actions(&b).is_empty());
    }

    #[test]
    fn assigned_driver_suppresses_cancel_driver_everywhere() {
        for status in ALL_STATUSES {
            let mut b = booking(status);
            b.needs_driver = true;
            b.driver = driver();
            assert!(
                !permitted_actions(&b).contains(&Action::CancelDriverRequest),
                "{status}"
            );
        }
    }

    #[test]
    fn before_report_only_at_pickup_and_only_once() {
        let mut b = booking(BookingStatus::PickupConfirmed);
        assert_eq!(permitted_actions(&b), vec![Action::ReportBefore]);

        b.condition_reports.push(report(ConditionReportType::Before));
        assert!(permitted_actions(&b).is_empty());
    }

    #[test]
    fn after_report_requires_delivery_and_a_before_report() {
        let mut b = booking(BookingStatus::Delivered);
        // No before report yet: nothing to do.
        assert!(permitted_actions(&b).is_empty());

        b.condition_reports.push(report(ConditionReportType::Before));
        assert_eq!(permitted_actions(&b), vec![Action::ReportAfter]);

        b.condition_reports.push(report(ConditionReportType::After));
        assert!(permitted_actions(&b).is_empty());
    }

    #[test]
    fn before_and_after_never_permitted_together() {
        for status in ALL_STATUSES {
            for reports in [
                vec![],
                vec![report(ConditionReportType::Before)],
                vec![report(ConditionReportType::After)],
                vec![
                    report(ConditionReportType::Before),
                    report(ConditionReportType::After),
                ],
            ] {
                let mut b = booking(status);
                b.condition_reports = reports;
                let permitted = permitted_actions(&b);
                assert!(
                    !(permitted.contains(&Action::ReportBefore)
                        && permitted.contains(&Action::ReportAfter)),
                    "{status}"
                );
            }
        }
    }

    #[test]
    fn after_never_permitted_without_before() {
        for status in ALL_STATUSES {
            let b = booking(status);
            assert!(
                !permitted_actions(&b).contains(&Action::ReportAfter),
                "{status}"
            );
        }
    }

    #[test]
    fn completed_permits_payment_and_rating() {
        assert_eq!(
            permitted_actions(&booking(BookingStatus::Completed)),
            vec![Action::MakePayment, Action::Rate]
        );
    }

    #[test]
    fn terminal_and_unknown_statuses_permit_nothing() {
        for status in [
            BookingStatus::Paid,
            BookingStatus::Cancelled,
            BookingStatus::Rejected,
            BookingStatus::Unknown,
        ] {
            assert!(permitted_actions(&booking(status)).is_empty(), "{status}");
        }
    }

    #[test]
    fn defaulted_record_permits_nothing() {
        // The transport boundary fills unknown/missing fields with
        // defaults; the gate must treat that record as inert.
        assert!(permitted_actions(&Booking::default()).is_empty());
    }

    #[test]
    fn driver_confirms_while_assigned() {
        assert_eq!(
            driver_actions(&booking(BookingStatus::Assigned)),
            vec![DriverAction::ConfirmAssignment]
        );
    }

    #[test]
    fn driver_trip_actions_at_pickup() {
        let mut b = booking(BookingStatus::PickupConfirmed);
        assert_eq!(
            driver_actions(&b),
            vec![
                DriverAction::ReportBefore,
                DriverAction::UpdateLocation,
                DriverAction::CompleteTrip,
            ]
        );

        b.condition_reports.push(report(ConditionReportType::Before));
        assert_eq!(
            driver_actions(&b),
            vec![DriverAction::UpdateLocation, DriverAction::CompleteTrip]
        );
    }

    #[test]
    fn driver_after_report_mirrors_customer_rules() {
        let mut b = booking(BookingStatus::Delivered);
        assert!(driver_actions(&b).is_empty());
        b.condition_reports.push(report(ConditionReportType::Before));
        assert_eq!(driver_actions(&b), vec![DriverAction::ReportAfter]);
    }

    #[test]
    fn assignment_requires_request_approval_and_no_driver() {
        let mut b = booking(BookingStatus::Approved);
        b.needs_driver = true;
        b.owner_approved = true;
        assert!(awaiting_driver_assignment(&b));

        assert!(!awaiting_driver_assignment(&{
            let mut c = b.clone();
            c.driver = driver();
            c
        }));
        assert!(!awaiting_driver_assignment(&{
            let mut c = b.clone();
            c.owner_approved = false;
            c
        }));
        assert!(!awaiting_driver_assignment(&{
            let mut c = b.clone();
            c.needs_driver = false;
            c
        }));
        assert!(!awaiting_driver_assignment(&{
            let mut c = b.clone();
            c.status = BookingStatus::Assigned;
            c
        }));
    }

    #[test]
    fn owner_decides_pending_only() {
        for status in ALL_STATUSES {
            assert_eq!(
                awaiting_owner_decision(&booking(status)),
                status == BookingStatus::Pending,
                "{status}"
            );
        }
    }

    #[test]
    fn refusal_message_distinguishes_finished_reports() {
        let mut b = booking(BookingStatus::Completed);
        assert_eq!(
            report_refusal(&b),
            "Cannot report at this stage. Please confirm pickup or complete delivery."
        );
        b.condition_reports = vec![
            report(ConditionReportType::Before),
            report(ConditionReportType::After),
        ];
        assert_eq!(report_refusal(&b), "Both reports have been submitted.");
    }
}
