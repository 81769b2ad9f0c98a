use chrono::{Datelike, Duration, Local, NaiveDate};

use crate::ui::core::input::{Event, Key};
use crate::ui::core::runtime::EventCx;
use crate::ui::core::style::{Color, Mod};
use crate::ui::core::widget::{Control, RenderCx};
use crate::ui::view::{Grid, TextSpan, Vertical, View};

const WEEKDAYS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// A month calendar with one selected day.
///
/// Left/Right move by a day, Up/Down by a week, `t` jumps to today. Moving
/// across a month boundary shows the new month.
pub struct SelectDate {
    value: NaiveDate,
    id: Option<String>,
}

impl SelectDate {
    pub fn new(value: NaiveDate) -> Self {
        Self { value, id: None }
    }

    pub fn today() -> Self {
        Self::new(Local::now().date_naive())
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn value(&self) -> NaiveDate {
        self.value
    }

    fn shift(&mut self, days: i64) {
        if let Some(date) = self.value.checked_add_signed(Duration::days(days)) {
            self.value = date;
        }
    }
}

fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|d| d.pred_opt())
        .map(|d| d.day())
        .unwrap_or(31)
}

/// Monday-first weeks of `date`'s month; days outside the month are `None`.
pub fn month_weeks(date: NaiveDate) -> Vec<[Option<u32>; 7]> {
    let lead = date
        .with_day(1)
        .map(|first| first.weekday().num_days_from_monday())
        .unwrap_or(0) as usize;
    let days = days_in_month(date.year(), date.month());

    let mut weeks = Vec::new();
    let mut week = [None; 7];
    let mut col = lead;
    for day in 1..=days {
        week[col] = Some(day);
        col += 1;
        if col == 7 {
            weeks.push(week);
            week = [None; 7];
            col = 0;
        }
    }
    if col > 0 {
        weeks.push(week);
    }
    weeks
}

impl Control for SelectDate {
    fn render(&self, cx: &mut RenderCx<'_>) -> View {
        let selected = if cx.contains_focus() {
            Mod::STANDOUT
        } else {
            Mod::UNDERLINE
        };

        let mut rows: Vec<Vec<View>> = vec![WEEKDAYS
            .iter()
            .map(|name| TextSpan::new(*name).fg(Color::Green).into())
            .collect()];
        for week in month_weeks(self.value) {
            rows.push(
                week.iter()
                    .map(|day| match day {
                        Some(d) if *d == self.value.day() => {
                            TextSpan::new(d.to_string()).mods(selected).into()
                        }
                        Some(d) => TextSpan::new(d.to_string()).into(),
                        None => TextSpan::new("").into(),
                    })
                    .collect(),
            );
        }

        let heading = TextSpan::new(self.value.format("%B, %Y").to_string());
        Vertical::new(vec![heading.into(), Grid::new(rows).align_right(true).into()]).into()
    }

    fn on_event(&mut self, ev: &mut Event, _cx: &mut EventCx<'_>) {
        let days = match ev.key_code() {
            Some(Key::Left) => -1,
            Some(Key::Right) => 1,
            Some(Key::Up) => -7,
            Some(Key::Down) => 7,
            Some(Key::Char('t')) => {
                self.value = Local::now().date_naive();
                ev.stop();
                return;
            }
            _ => return,
        };
        self.shift(days);
        ev.stop();
    }

    fn can_focus(&self) -> bool {
        true
    }

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/widgets/select_date.rs"]
mod tests;
