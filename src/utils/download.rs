//! Download transport for packs, manifests and indexes
//!
//! `Downloader` is the seam between the installer and the network. The
//! production implementation speaks HTTP(S) through a blocking reqwest
//! client and also accepts `file://` URLs for locally served manifests.

use crate::error::{Error, Result};
use crate::utils::temp::TempDownload;
use indicatif::{ProgressBar, ProgressStyle};
use reqwest::blocking::Client;
use reqwest::Url;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::time::Duration;

/// Default HTTP timeout for pack downloads
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(300);

/// Fetches the content behind a URL into a writer.
pub trait Downloader {
    fn download(&self, url: &str, dest: &mut dyn Write) -> Result<()>;
}

/// HTTP(S) and `file://` downloader
#[derive(Debug, Clone)]
pub struct HttpDownloader {
    timeout: Duration,
    show_progress: bool,
}

impl Default for HttpDownloader {
    fn default() -> Self {
        Self::new(DEFAULT_TIMEOUT)
    }
}

impl HttpDownloader {
    pub fn new(timeout: Duration) -> Self {
        Self {
            timeout,
            show_progress: true,
        }
    }

    /// Disable the progress bar (quiet mode)
    pub fn without_progress(mut self) -> Self {
        self.show_progress = false;
        self
    }

    fn client(&self) -> Result<Client> {
        Client::builder()
            .timeout(self.timeout)
            .user_agent(concat!("packget/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| Error::Network(format!("Failed to create HTTP client: {}", e)))
    }

    /// Send a GET request with standardized error handling
    fn send_request(&self, url: &str) -> Result<reqwest::blocking::Response> {
        self.client()?.get(url).send().map_err(|e| {
            if e.is_timeout() {
                Error::Network(format!("Request timed out: {}", url))
            } else if e.is_connect() {
                Error::Network(format!("Connection failed: {}", url))
            } else {
                Error::Network(format!("HTTP error: {}", e))
            }
        })
    }

    fn progress_bar(&self, len: Option<u64>, url: &str) -> ProgressBar {
        if !self.show_progress {
            return ProgressBar::hidden();
        }

        let bar = match len {
            Some(len) => ProgressBar::new(len),
            None => ProgressBar::new_spinner(),
        };
        if let Ok(style) =
            ProgressStyle::with_template("{msg} [{bar:30}] {bytes}/{total_bytes} ({eta})")
        {
            bar.set_style(style.progress_chars("=> "));
        }
        bar.set_message(file_name_from_url(url).unwrap_or(url).to_string());
        bar
    }
}

impl Downloader for HttpDownloader {
    fn download(&self, url: &str, dest: &mut dyn Write) -> Result<()> {
        if url.get(..7).is_some_and(|scheme| scheme.eq_ignore_ascii_case("file://")) {
            return copy_file_url(url, dest);
        }

        let mut response = self.send_request(url)?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::Network(format!(
                "HTTP {} for {}",
                status.as_u16(),
                url
            )));
        }

        let progress = self.progress_bar(response.content_length(), url);
        let mut writer = progress.wrap_write(dest);
        response
            .copy_to(&mut writer)
            .map_err(|e| Error::Network(format!("Failed to read response from {}: {}", url, e)))?;
        progress.finish_and_clear();

        Ok(())
    }
}

fn copy_file_url(url: &str, dest: &mut dyn Write) -> Result<()> {
    let path = Url::parse(url)
        .ok()
        .and_then(|u| u.to_file_path().ok())
        .ok_or_else(|| Error::Network(format!("Invalid file URL: {}", url)))?;

    let mut file = File::open(&path).map_err(|e| {
        Error::Network(format!("Failed to open {}: {}", path.display(), e))
    })?;
    std::io::copy(&mut file, dest)?;
    Ok(())
}

/// Last path segment of a URL, without query or fragment.
pub fn file_name_from_url(url: &str) -> Option<&str> {
    let url = url.split(['?', '#']).next().unwrap_or(url);
    url.rsplit('/').next().filter(|name| !name.is_empty())
}

/// Download `url` into a temporary file inside `dir`.
///
/// The returned guard deletes the file unless it is persisted.
pub fn download_file(downloader: &dyn Downloader, url: &str, dir: &Path) -> Result<TempDownload> {
    tracing::debug!("Downloading {} into {}", url, dir.display());

    let hint = file_name_from_url(url).unwrap_or("download");
    let (temp, mut file) = TempDownload::create(dir, hint)?;
    downloader.download(url, &mut file)?;
    file.flush()?;

    Ok(temp)
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::rc::Rc;

    /// In-memory downloader that records every requested URL.
    #[derive(Default)]
    pub(crate) struct FakeDownloader {
        files: HashMap<String, Vec<u8>>,
        requests: Rc<RefCell<Vec<String>>>,
    }

    impl FakeDownloader {
        pub(crate) fn new() -> Self {
            Self::default()
        }

        pub(crate) fn with_file(mut self, url: &str, content: impl Into<Vec<u8>>) -> Self {
            self.files.insert(url.to_string(), content.into());
            self
        }

        pub(crate) fn requests(&self) -> Rc<RefCell<Vec<String>>> {
            Rc::clone(&self.requests)
        }
    }

    impl Downloader for FakeDownloader {
        fn download(&self, url: &str, dest: &mut dyn Write) -> Result<()> {
            self.requests.borrow_mut().push(url.to_string());
            match self.files.get(url) {
                Some(content) => {
                    dest.write_all(content)?;
                    Ok(())
                }
                None => Err(Error::Network(format!("HTTP 404 for {}", url))),
            }
        }
    }
}
