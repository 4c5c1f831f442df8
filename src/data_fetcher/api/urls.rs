//! URL building utilities for the weekly weather pages

/// Builds the URL of a week's weather page.
///
/// # Example
/// ```
/// use nfl_weather::data_fetcher::api::build_week_url;
///
/// let url = build_week_url("http://www.nflweather.com", 2014, 3);
/// assert_eq!(url, "http://www.nflweather.com/en/week/2014/week-3/");
/// ```
pub fn build_week_url(base_url: &str, year: i32, week: u32) -> String {
    format!("{base_url}/en/week/{year}/week-{week}/")
}

/// Builds the alternate URL that some weeks are published under.
///
/// # Example
/// ```
/// use nfl_weather::data_fetcher::api::build_alternate_week_url;
///
/// let url = build_alternate_week_url("http://www.nflweather.com", 2014, 3);
/// assert_eq!(url, "http://www.nflweather.com/en/week/2014/week-3-2/");
/// ```
pub fn build_alternate_week_url(base_url: &str, year: i32, week: u32) -> String {
    format!("{base_url}/en/week/{year}/week-{week}-2/")
}
