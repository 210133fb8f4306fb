//! Opening-hours status calculator
//!
//! Pure function of (weekday, hour); the fixed weekly schedule is
//! Mon-Fri 05:00-23:00, Sat 07:00-20:00, Sun 08:00-18:00. All labels
//! are pt-BR, matching the marketing site copy.

use chrono::{Datelike, Local, Timelike};

use crate::models::home::GymStatus;

/// pt-BR day names, indexed by weekday (0 = Sunday)
const DAY_NAMES: [&str; 7] = [
    "Domingo", "Segunda", "Terça", "Quarta", "Quinta", "Sexta", "Sábado",
];

struct DaySchedule {
    open: u32,
    close: u32,
    /// Next-opening label used once the day has closed; day-prefixed
    /// because the opening falls on the following day
    after_close: &'static str,
}

/// Weekly schedule, indexed by weekday (0 = Sunday)
const WEEK: [DaySchedule; 7] = [
    DaySchedule { open: 8, close: 18, after_close: "Segunda, 05:00" },
    DaySchedule { open: 5, close: 23, after_close: "Terça, 05:00" },
    DaySchedule { open: 5, close: 23, after_close: "Quarta, 05:00" },
    DaySchedule { open: 5, close: 23, after_close: "Quinta, 05:00" },
    DaySchedule { open: 5, close: 23, after_close: "Sexta, 05:00" },
    DaySchedule { open: 5, close: 23, after_close: "Sábado, 07:00" },
    DaySchedule { open: 7, close: 20, after_close: "Domingo, 08:00" },
];

/// Status for the current wall-clock time
pub fn current_status() -> GymStatus {
    let now = Local::now();
    status_at(
        now.weekday().num_days_from_sunday() as usize,
        now.hour(),
        now.minute(),
    )
}

/// Status for an arbitrary (weekday, hour, minute); weekday 0 is Sunday
pub fn status_at(weekday: usize, hour: u32, minute: u32) -> GymStatus {
    let day = &WEEK[weekday % 7];
    let is_open = hour >= day.open && hour < day.close;

    let (next_status, next_time) = if is_open {
        ("Fechamento", format!("{:02}:00", day.close))
    } else if hour < day.open {
        ("Abertura", format!("{:02}:00", day.open))
    } else {
        ("Abertura", day.after_close.to_string())
    };

    let message = if is_open {
        format!("Estamos abertos! Fechamento às {}", next_time)
    } else {
        format!("Estamos fechados. Abertura: {}", next_time)
    };

    GymStatus {
        is_open,
        message,
        status: if is_open { "Aberto" } else { "Fechado" }.to_string(),
        next_status: next_status.to_string(),
        next_time,
        current_time: format!("{:02}:{:02}", hour, minute),
        day_name: DAY_NAMES[weekday % 7].to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn monday_mid_morning_is_open_until_23() {
        let status = status_at(1, 10, 0);
        assert!(status.is_open);
        assert_eq!(status.status, "Aberto");
        assert_eq!(status.next_status, "Fechamento");
        assert_eq!(status.next_time, "23:00");
        assert_eq!(status.day_name, "Segunda");
    }

    #[test]
    fn sunday_evening_points_to_monday_opening() {
        let status = status_at(0, 20, 0);
        assert!(!status.is_open);
        assert_eq!(status.status, "Fechado");
        assert_eq!(status.next_status, "Abertura");
        assert_eq!(status.next_time, "Segunda, 05:00");
        assert_eq!(status.day_name, "Domingo");
    }

    #[test]
    fn saturday_before_opening() {
        let status = status_at(6, 6, 30);
        assert!(!status.is_open);
        assert_eq!(status.next_status, "Abertura");
        assert_eq!(status.next_time, "07:00");
        assert_eq!(status.current_time, "06:30");
    }

    #[test]
    fn friday_after_close_points_to_saturday() {
        let status = status_at(5, 23, 15);
        assert!(!status.is_open);
        assert_eq!(status.next_time, "Sábado, 07:00");
    }

    #[test]
    fn opening_hour_is_inclusive_and_closing_hour_exclusive() {
        assert!(status_at(1, 5, 0).is_open);
        assert!(!status_at(1, 4, 59).is_open);
        assert!(!status_at(1, 23, 0).is_open);
        assert!(status_at(0, 8, 0).is_open);
        assert!(!status_at(0, 18, 0).is_open);
    }
}
