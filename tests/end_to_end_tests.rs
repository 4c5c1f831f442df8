use nfl_weather::{
    CSV_HEADERS,
    commands::run_sweep_to_file,
    data_fetcher::{NflWeatherSource, api::http_client::create_http_client},
    sweep::{SweepOptions, SweepRange},
};
use std::fs;
use tempfile::tempdir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const HTML: &str = "text/html; charset=utf-8";

fn week_page(rows: &[[&str; 5]]) -> String {
    let body: String = rows
        .iter()
        .map(|cells| {
            let tds: String = cells.iter().map(|c| format!("<td>{c}</td>")).collect();
            format!("<tr>{tds}</tr>")
        })
        .collect();
    format!(
        "<html><body><table><tr><th>Away</th><th>Home</th></tr>{body}</table></body></html>"
    )
}

fn create_source(server: &MockServer) -> NflWeatherSource {
    let client = create_http_client(5, "nfl_weather-tests").unwrap();
    NflWeatherSource::new(client, server.uri())
}

#[tokio::test]
async fn test_sweep_writes_csv_from_http_pages() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/en/week/2012/week-1/"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            week_page(&[
                ["Buccaneers", "Saints", "Final: 24-27", "5f Cloudy", "8m NW"],
                ["Lions", "Vikings", "Final: 13-20", "DOME", ""],
            ]),
            HTML,
        ))
        .mount(&server)
        .await;

    // Week 2 is only published under the alternate URL
    Mock::given(method("GET"))
        .and(path("/en/week/2012/week-2-2/"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            week_page(&[["Bears", "Packers", "Q4 7 14", "28f Snow", "15m NE"]]),
            HTML,
        ))
        .mount(&server)
        .await;

    let dir = tempdir().unwrap();
    let roster_path = dir.path().join("NFL Team List.csv");
    fs::write(&roster_path, "Saints\nBuccaneers\nLions\nVikings\nBears\nPackers\n").unwrap();
    let output_path = dir.path().join("NFL Weather Data.csv");

    let source = create_source(&server);
    let range = SweepRange::new(2012, 2013, 1, 4).unwrap();
    let summary = run_sweep_to_file(
        &source,
        &roster_path,
        &output_path,
        &range,
        SweepOptions::default(),
    )
    .await
    .unwrap();

    // Week 3 has no page at either URL
    assert_eq!(summary.pages_fetched, 2);
    assert_eq!(summary.pages_failed, 1);
    assert_eq!(summary.records, 3);

    let mut reader = csv::Reader::from_path(&output_path).unwrap();
    let headers: Vec<String> = reader.headers().unwrap().iter().map(String::from).collect();
    assert_eq!(headers, CSV_HEADERS);

    let rows: Vec<csv::StringRecord> = reader.records().map(Result::unwrap).collect();
    assert_eq!(rows.len(), 3);

    let fields = |row: &csv::StringRecord| row.iter().skip(1).map(String::from).collect::<Vec<_>>();
    assert_eq!(
        fields(&rows[0]),
        ["2012", "1", "Buccaneers", "Saints", "24", "27", "5", "Cloudy", "false", "8", "NW"]
    );
    assert_eq!(
        fields(&rows[1]),
        ["2012", "1", "Lions", "Vikings", "13", "20", "72", "DOME", "true", "", ""]
    );
    assert_eq!(
        fields(&rows[2]),
        ["2012", "2", "Bears", "Packers", "7", "14", "28", "Snow", "false", "15", "NE"]
    );
}

#[tokio::test]
async fn test_missing_roster_fails_before_fetching() {
    let server = MockServer::start().await;
    let dir = tempdir().unwrap();

    let source = create_source(&server);
    let range = SweepRange::new(2012, 2013, 1, 2).unwrap();
    let result = run_sweep_to_file(
        &source,
        &dir.path().join("missing.csv"),
        &dir.path().join("out.csv"),
        &range,
        SweepOptions::default(),
    )
    .await;

    assert!(result.is_err());
    assert!(server.received_requests().await.unwrap_or_default().is_empty());
    assert!(!dir.path().join("out.csv").exists());
}

#[tokio::test]
async fn test_skip_malformed_pages_option() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/en/week/2016/week-1/"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            week_page(&[["Bears", "Packers", "Final: 3-6", "Half 45f Rain", ""]]),
            HTML,
        ))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/en/week/2016/week-2/"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            week_page(&[["Saints", "Buccaneers", "Final: 31-3", "80f Sunny", "2m S"]]),
            HTML,
        ))
        .mount(&server)
        .await;

    let dir = tempdir().unwrap();
    let roster_path = dir.path().join("teams.csv");
    fs::write(&roster_path, "Saints,Buccaneers\nBears,Packers\n").unwrap();
    let output_path = dir.path().join("out").join("weather.csv");

    let source = create_source(&server);
    let range = SweepRange::new(2016, 2017, 1, 3).unwrap();

    // Without skipping, the malformed first page aborts the run
    let strict = run_sweep_to_file(
        &source,
        &roster_path,
        &output_path,
        &range,
        SweepOptions::default(),
    )
    .await;
    assert!(strict.is_err());
    assert!(!output_path.exists());

    let summary = run_sweep_to_file(
        &source,
        &roster_path,
        &output_path,
        &range,
        SweepOptions {
            skip_malformed_pages: true,
        },
    )
    .await
    .unwrap();

    assert_eq!(summary.pages_skipped, 1);
    assert_eq!(summary.records, 1);

    let written = fs::read_to_string(&output_path).unwrap();
    assert_eq!(written.lines().count(), 2);
    assert!(written.contains(",2016,2,Saints,Buccaneers,31,3,80,Sunny,false,2,S"));
}
