//! Client-side shaping of the raw forecast list: day buckets, the 3-day
//! pagination window, per-day summaries and the hourly chart series.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::api_client::forecast::{ForecastSample, WeatherSummary};

/// Temperature unit selection; maps to the API `units` query flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Units {
    Fahrenheit,
    Celsius,
}

impl Units {
    /// Value of the API `units` query parameter.
    pub fn api_param(&self) -> &'static str {
        match self {
            Units::Fahrenheit => "imperial",
            Units::Celsius => "metric",
        }
    }

    /// Suffix appended to displayed temperatures.
    pub fn suffix(&self) -> &'static str {
        match self {
            Units::Fahrenheit => "\u{b0}F",
            Units::Celsius => "\u{b0}C",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Units::Fahrenheit => "Fahrenheit",
            Units::Celsius => "Celsius",
        }
    }
}

/// All samples sharing one calendar date, in chronological order.
#[derive(Debug, Clone, PartialEq)]
pub struct DayForecast {
    /// Date key, "YYYY-MM-DD"
    pub date: String,
    pub samples: Vec<ForecastSample>,
}

impl DayForecast {
    /// Rounded mean of the day's temperatures.
    pub fn average_temp(&self) -> i32 {
        if self.samples.is_empty() {
            return 0;
        }
        let sum: f64 = self.samples.iter().map(|s| s.main.temp).sum();
        (sum / self.samples.len() as f64).round() as i32
    }

    /// The day's representative weather: the first sample's leading entry.
    pub fn headline_weather(&self) -> Option<&WeatherSummary> {
        self.samples.first().and_then(|s| s.weather.first())
    }

    /// ("HH:MM", temperature) pairs for the hourly chart, chronological.
    pub fn chart_points(&self) -> Vec<(String, f64)> {
        self.samples
            .iter()
            .map(|s| (time_of_day(&s.dt_txt), s.main.temp))
            .collect()
    }
}

/// Calendar-date prefix of a sample timestamp ("YYYY-MM-DD HH:MM:SS").
fn date_key(dt_txt: &str) -> &str {
    dt_txt.split(' ').next().unwrap_or(dt_txt)
}

/// "HH:MM" portion of a sample timestamp.
fn time_of_day(dt_txt: &str) -> String {
    dt_txt
        .split(' ')
        .nth(1)
        .map(|t| t.get(..5).unwrap_or(t).to_string())
        .unwrap_or_default()
}

/// Group the flat sample list into per-day buckets keyed by the date prefix,
/// in first-occurrence order. Sample order inside a bucket is input order.
pub fn group_by_day(samples: &[ForecastSample]) -> Vec<DayForecast> {
    let mut days: Vec<DayForecast> = Vec::new();
    for sample in samples {
        let key = date_key(&sample.dt_txt);
        match days.iter_mut().find(|d| d.date == key) {
            Some(day) => day.samples.push(sample.clone()),
            None => days.push(DayForecast {
                date: key.to_string(),
                samples: vec![sample.clone()],
            }),
        }
    }
    days
}

/// Largest valid cursor position. The window spans buckets `page-1 ..= page+1`
/// (0-based), so the cursor tops out at `num_days - 2`.
pub fn max_page(num_days: usize) -> usize {
    num_days.saturating_sub(2).max(1)
}

/// Clamp the 1-based cursor so the 3-day window stays in range.
pub fn clamp_page(page: usize, num_days: usize) -> usize {
    page.clamp(1, max_page(num_days))
}

/// Whether bucket `index` (0-based) falls inside the window at `page`.
pub fn in_window(index: usize, page: usize) -> bool {
    index + 1 >= page && index <= page + 1
}

/// Resolve a selected date key against the current buckets. A key that is no
/// longer present after a refetch yields `None`, dropping the selection.
pub fn selected_day<'a>(days: &'a [DayForecast], selected: Option<&str>) -> Option<&'a DayForecast> {
    let key = selected?;
    days.iter().find(|d| d.date == key)
}

/// Long-form card date ("Monday, 10 August 2026"); falls back to the raw key
/// if it does not parse.
pub fn format_long_date(date: &str) -> String {
    match NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        Ok(d) => d.format("%A, %-d %B %Y").to_string(),
        Err(_) => date.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api_client::forecast::MainReadings;

    fn sample(dt_txt: &str, temp: f64) -> ForecastSample {
        ForecastSample {
            dt_txt: dt_txt.to_string(),
            main: MainReadings { temp },
            weather: vec![],
        }
    }

    fn sample_with_weather(dt_txt: &str, temp: f64, main: &str) -> ForecastSample {
        ForecastSample {
            weather: vec![WeatherSummary {
                main: main.to_string(),
                description: format!("{} sky", main.to_lowercase()),
                icon: "01d".to_string(),
            }],
            ..sample(dt_txt, temp)
        }
    }

    fn two_day_list() -> Vec<ForecastSample> {
        vec![
            sample("2026-08-06 09:00:00", 14.0),
            sample("2026-08-06 12:00:00", 15.0),
            sample("2026-08-06 15:00:00", 16.0),
            sample("2026-08-07 09:00:00", 21.0),
            sample("2026-08-07 12:00:00", 22.0),
            sample("2026-08-07 15:00:00", 23.0),
        ]
    }

    #[test]
    fn test_group_by_day_partitions_samples() {
        let days = group_by_day(&two_day_list());

        assert_eq!(days.len(), 2);
        assert_eq!(days[0].date, "2026-08-06");
        assert_eq!(days[1].date, "2026-08-07");
        assert_eq!(days[0].samples.len(), 3);
        assert_eq!(days[1].samples.len(), 3);

        // Every sample lands in the bucket matching its date prefix
        for day in &days {
            for s in &day.samples {
                assert!(s.dt_txt.starts_with(&day.date));
            }
        }
    }

    #[test]
    fn test_group_by_day_first_occurrence_order() {
        let list = vec![
            sample("2026-08-07 09:00:00", 21.0),
            sample("2026-08-06 09:00:00", 14.0),
            sample("2026-08-07 12:00:00", 22.0),
        ];
        let days = group_by_day(&list);

        assert_eq!(days.len(), 2);
        assert_eq!(days[0].date, "2026-08-07");
        assert_eq!(days[1].date, "2026-08-06");
        // Intra-bucket order follows the input
        assert_eq!(days[0].samples[0].dt_txt, "2026-08-07 09:00:00");
        assert_eq!(days[0].samples[1].dt_txt, "2026-08-07 12:00:00");
    }

    #[test]
    fn test_group_by_day_empty_list() {
        assert!(group_by_day(&[]).is_empty());
    }

    #[test]
    fn test_average_temp_rounds_mean() {
        let day = DayForecast {
            date: "2026-08-06".to_string(),
            samples: vec![
                sample("2026-08-06 09:00:00", 10.0),
                sample("2026-08-06 12:00:00", 20.0),
                sample("2026-08-06 15:00:00", 30.0),
            ],
        };
        assert_eq!(day.average_temp(), 20);

        let day = DayForecast {
            date: "2026-08-06".to_string(),
            samples: vec![
                sample("2026-08-06 09:00:00", 10.0),
                sample("2026-08-06 12:00:00", 11.0),
            ],
        };
        assert_eq!(day.average_temp(), 11); // 10.5 rounds away from zero
    }

    #[test]
    fn test_headline_weather_comes_from_first_sample() {
        let day = DayForecast {
            date: "2026-08-06".to_string(),
            samples: vec![
                sample_with_weather("2026-08-06 09:00:00", 14.0, "Clouds"),
                sample_with_weather("2026-08-06 12:00:00", 15.0, "Clear"),
            ],
        };
        assert_eq!(day.headline_weather().map(|w| w.main.as_str()), Some("Clouds"));

        // A day whose first sample carries no weather entry renders blank
        let bare = DayForecast {
            date: "2026-08-06".to_string(),
            samples: vec![sample("2026-08-06 09:00:00", 14.0)],
        };
        assert!(bare.headline_weather().is_none());
    }

    #[test]
    fn test_chart_points_follow_sample_order() {
        let days = group_by_day(&two_day_list());
        let points = days[0].chart_points();

        assert_eq!(points.len(), days[0].samples.len());
        assert_eq!(points[0], ("09:00".to_string(), 14.0));
        assert_eq!(points[1], ("12:00".to_string(), 15.0));
        assert_eq!(points[2], ("15:00".to_string(), 16.0));
    }

    #[test]
    fn test_page_clamping() {
        // 5 days: cursor ranges over [1, 3]
        assert_eq!(max_page(5), 3);
        assert_eq!(clamp_page(1, 5), 1);
        assert_eq!(clamp_page(3, 5), 3);
        assert_eq!(clamp_page(99, 5), 3);

        // Fewer than 3 days: cursor pinned at 1
        assert_eq!(max_page(2), 1);
        assert_eq!(max_page(0), 1);
        assert_eq!(clamp_page(4, 2), 1);
    }

    #[test]
    fn test_window_membership() {
        // page 1 shows buckets 0..=2
        assert!(in_window(0, 1));
        assert!(in_window(2, 1));
        assert!(!in_window(3, 1));

        // page 2 shows buckets 1..=3
        assert!(!in_window(0, 2));
        assert!(in_window(1, 2));
        assert!(in_window(3, 2));
        assert!(!in_window(4, 2));
    }

    #[test]
    fn test_window_length_at_most_three() {
        for num_days in 1..=6usize {
            for page in 1..=max_page(num_days) {
                let visible = (0..num_days).filter(|i| in_window(*i, page)).count();
                assert!(visible <= 3, "window of {} at page {}", num_days, page);
            }
        }
    }

    #[test]
    fn test_selection_survives_refetch() {
        let days = group_by_day(&two_day_list());
        let picked = selected_day(&days, Some("2026-08-07")).expect("day present");
        assert_eq!(picked.samples.len(), 3);

        // Refetched data for the same days resolves the same key to the
        // refreshed samples
        let refreshed = vec![
            sample("2026-08-06 09:00:00", -10.0),
            sample("2026-08-07 09:00:00", -5.5),
        ];
        let days = group_by_day(&refreshed);
        let picked = selected_day(&days, Some("2026-08-07")).expect("day still present");
        assert_eq!(picked.samples.len(), 1);
        assert!((picked.samples[0].main.temp + 5.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_selection_dropped_when_day_missing() {
        let days = group_by_day(&two_day_list());
        assert!(selected_day(&days, Some("2026-08-20")).is_none());
        assert!(selected_day(&days, None).is_none());
    }

    #[test]
    fn test_unit_toggle_scenario() {
        // 2 days x 3 samples averaging 15F and 22F
        let days = group_by_day(&two_day_list());
        assert_eq!(days[0].average_temp(), 15);
        assert_eq!(days[1].average_temp(), 22);

        // After a unit toggle the same days come back with metric values;
        // grouping and selection are unchanged, averages re-derive
        let metric: Vec<ForecastSample> = two_day_list()
            .into_iter()
            .map(|mut s| {
                s.main.temp = (s.main.temp - 32.0) / 1.8;
                s
            })
            .collect();
        let refetched = group_by_day(&metric);

        assert_eq!(refetched.len(), days.len());
        assert_eq!(refetched[0].date, days[0].date);
        assert!(selected_day(&refetched, Some("2026-08-07")).is_some());
        assert_eq!(refetched[0].average_temp(), -9); // 15F ~ -9.4C
        assert_eq!(refetched[1].average_temp(), -6); // 22F ~ -5.6C
    }

    #[test]
    fn test_units_map_to_api_params() {
        assert_eq!(Units::Fahrenheit.api_param(), "imperial");
        assert_eq!(Units::Celsius.api_param(), "metric");
        assert_eq!(Units::Fahrenheit.suffix(), "\u{b0}F");
        assert_eq!(Units::Celsius.suffix(), "\u{b0}C");
    }

    #[test]
    fn test_format_long_date() {
        assert_eq!(format_long_date("2026-08-06"), "Thursday, 6 August 2026");
        // Unparseable keys fall back verbatim
        assert_eq!(format_long_date("not-a-date"), "not-a-date");
    }
}
