use crate::weather_data::error::WeatherDataError;
use bon::bon;
use chrono::NaiveDate;
use log::{info, warn};
use reqwest::blocking::Client;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://apihub.kma.go.kr/api/typ01/url/upp_idx.php";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Downloads the raw observation payload for one station and date range.
///
/// Performs a single blocking GET. There is no retry: a failed request is
/// reported to the caller, which decides whether stale data is good enough.
pub struct ObservationFetcher {
    client: Client,
    base_url: String,
    station: String,
    start: NaiveDate,
    end: NaiveDate,
    auth_key: String,
}

#[bon]
impl ObservationFetcher {
    /// Creates a fetcher.
    ///
    /// # Arguments
    ///
    /// * `.station(..)`: **Required.** KMA station number, e.g. `"47169"`.
    /// * `.start(NaiveDate)` / `.end(NaiveDate)`: **Required.** Inclusive date range, sent as `YYYYMMDD00`.
    /// * `.auth_key(..)`: **Required.** API hub authentication key.
    /// * `.base_url(..)`: Optional. Defaults to [`DEFAULT_BASE_URL`].
    /// * `.timeout(Duration)`: Optional. Used for both connecting and the whole request, since the
    ///   blocking client has no per-read timeout. Defaults to 30 s.
    /// * `.system_proxy(bool)`: Optional. Honour `HTTP(S)_PROXY` from the environment. Defaults to `true`.
    ///
    /// # Errors
    ///
    /// Returns [`WeatherDataError::ClientBuild`] if the HTTP client cannot be constructed.
    #[builder]
    pub fn new(
        #[builder(into)] station: String,
        start: NaiveDate,
        end: NaiveDate,
        #[builder(into)] auth_key: String,
        #[builder(into)] base_url: Option<String>,
        timeout: Option<Duration>,
        system_proxy: Option<bool>,
    ) -> Result<Self, WeatherDataError> {
        let timeout = timeout.unwrap_or(DEFAULT_TIMEOUT);
        let mut builder = Client::builder().connect_timeout(timeout).timeout(timeout);
        if !system_proxy.unwrap_or(true) {
            builder = builder.no_proxy();
        }
        let client = builder.build().map_err(WeatherDataError::ClientBuild)?;

        Ok(Self {
            client,
            base_url: base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            station,
            start,
            end,
            auth_key,
        })
    }

    pub fn station(&self) -> &str {
        &self.station
    }

    /// Request URL without the auth key, safe to log or embed in errors.
    pub fn redacted_url(&self) -> String {
        format!(
            "{}?tm1={}&tm2={}&stn={}",
            self.base_url,
            format_range_bound(self.start),
            format_range_bound(self.end),
            self.station
        )
    }

    fn request_url(&self) -> String {
        format!("{}&authKey={}", self.redacted_url(), self.auth_key)
    }

    /// Fetches the raw text body.
    ///
    /// # Errors
    ///
    /// * [`WeatherDataError::NetworkRequest`] on connection failure, timeout or an unreadable body.
    /// * [`WeatherDataError::HttpStatus`] on any non-2xx response.
    pub fn fetch(&self) -> Result<String, WeatherDataError> {
        let url = self.redacted_url();
        info!("Downloading observations from {}", url);

        let response = self
            .client
            .get(self.request_url())
            .send()
            .map_err(|e| WeatherDataError::NetworkRequest(url.clone(), e.without_url()))?;

        let response = match response.error_for_status() {
            Ok(resp) => resp,
            Err(e) => {
                let e = e.without_url();
                warn!("HTTP error for {}: {:?}", url, e);
                return Err(if let Some(status) = e.status() {
                    WeatherDataError::HttpStatus {
                        url,
                        status,
                        source: e,
                    }
                } else {
                    WeatherDataError::NetworkRequest(url, e)
                });
            }
        };

        let body = response
            .text()
            .map_err(|e| WeatherDataError::NetworkRequest(url.clone(), e.without_url()))?;
        info!(
            "Downloaded {} bytes for station {}",
            body.len(),
            self.station
        );
        Ok(body)
    }
}

fn format_range_bound(date: NaiveDate) -> String {
    format!("{}00", date.format("%Y%m%d"))
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::io::{BufRead, BufReader, Write};
    use std::net::TcpListener;
    use std::thread;

    /// Serves exactly one HTTP response on a local port and returns the base URL.
    pub(crate) fn serve_once(status_line: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind local listener");
        let addr = listener.local_addr().expect("local addr");
        thread::spawn(move || {
            if let Ok((mut stream, _)) = listener.accept() {
                let mut reader = BufReader::new(stream.try_clone().expect("clone stream"));
                let mut line = String::new();
                while reader.read_line(&mut line).map(|n| n > 0).unwrap_or(false) {
                    if line == "\r\n" {
                        break;
                    }
                    line.clear();
                }
                let response = format!(
                    "HTTP/1.1 {}\r\nContent-Type: text/plain\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    status_line,
                    body.len(),
                    body
                );
                let _ = stream.write_all(response.as_bytes());
            }
        });
        format!("http://{}/upp_idx.php", addr)
    }

    fn fetcher(base_url: String) -> ObservationFetcher {
        ObservationFetcher::builder()
            .station("47169")
            .start(NaiveDate::from_ymd_opt(2023, 3, 1).unwrap())
            .end(NaiveDate::from_ymd_opt(2023, 5, 31).unwrap())
            .auth_key("secret-key")
            .base_url(base_url)
            .timeout(Duration::from_secs(5))
            .system_proxy(false)
            .build()
            .expect("client builds")
    }

    #[test]
    fn url_follows_template_and_hides_key() {
        let fetcher = fetcher(DEFAULT_BASE_URL.to_string());
        assert_eq!(
            fetcher.redacted_url(),
            "https://apihub.kma.go.kr/api/typ01/url/upp_idx.php?tm1=2023030100&tm2=2023053100&stn=47169"
        );
        assert!(!fetcher.redacted_url().contains("secret-key"));
        assert!(fetcher.request_url().ends_with("&authKey=secret-key"));
    }

    #[test]
    fn fetch_returns_body_on_success() -> Result<(), WeatherDataError> {
        let base = serve_once("200 OK", "202303010000,47169,1,2,3,4,5,6,7,8\n");
        let body = fetcher(base).fetch()?;
        assert_eq!(body, "202303010000,47169,1,2,3,4,5,6,7,8\n");
        Ok(())
    }

    #[test]
    fn fetch_reports_http_status() {
        let base = serve_once("500 Internal Server Error", "boom");
        let result = fetcher(base).fetch();
        match result {
            Err(WeatherDataError::HttpStatus { status, url, .. }) => {
                assert_eq!(status, reqwest::StatusCode::INTERNAL_SERVER_ERROR);
                assert!(!url.contains("secret-key"));
            }
            other => panic!("expected HttpStatus, got {:?}", other),
        }
    }

    #[test]
    fn stalled_server_times_out() {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind local listener");
        let addr = listener.local_addr().expect("local addr");
        thread::spawn(move || {
            if let Ok((stream, _)) = listener.accept() {
                thread::sleep(Duration::from_secs(5));
                drop(stream);
            }
        });

        let fetcher = ObservationFetcher::builder()
            .station("47169")
            .start(NaiveDate::from_ymd_opt(2023, 3, 1).unwrap())
            .end(NaiveDate::from_ymd_opt(2023, 5, 31).unwrap())
            .auth_key("secret-key")
            .base_url(format!("http://{}/upp_idx.php", addr))
            .timeout(Duration::from_millis(300))
            .system_proxy(false)
            .build()
            .expect("client builds");

        match fetcher.fetch() {
            Err(WeatherDataError::NetworkRequest(url, source)) => {
                assert!(source.is_timeout());
                assert!(!url.contains("secret-key"));
            }
            other => panic!("expected a timeout, got {:?}", other),
        }
    }

    #[test]
    fn fetch_reports_network_failure() {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind local listener");
        let addr = listener.local_addr().expect("local addr");
        drop(listener);

        let result = fetcher(format!("http://{}/upp_idx.php", addr)).fetch();
        assert!(matches!(result, Err(WeatherDataError::NetworkRequest(..))));
    }
}
