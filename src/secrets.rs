//! WiFi and weather-API credentials baked in at compile time.
//!
//! `build.rs` reads `WIFI_SSID`, `WIFI_PASSWORD` and `WEATHER_API_TOKEN` from the
//! environment, a project `.env` file, or `~/.wifi-news.env`. Missing values become empty
//! strings (with a build warning). Keep the `.env` files out of version control.
//!
//! Nothing in the scrolling path reads these; they are here for the network and
//! weather code that decides what to display.

use heapless::String;

use crate::{Error, Result};

/// Network SSID from the build environment.
pub const WIFI_SSID: &str = env!("WIFI_SSID");
/// Network password from the build environment.
pub const WIFI_PASSWORD: &str = env!("WIFI_PASSWORD");
/// NOAA Climate Data Online token from the build environment.
pub const WEATHER_API_TOKEN: &str = env!("WEATHER_API_TOKEN");

/// WiFi network credentials (SSID and password).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WifiCredentials {
    /// Network SSID (up to 32 bytes).
    pub ssid: String<32>,
    /// Network password (up to 64 bytes).
    pub password: String<64>,
}

impl WifiCredentials {
    /// # Errors
    ///
    /// Returns [`Error::CredentialTooLong`] if either value exceeds its capacity.
    pub fn new(ssid: &str, password: &str) -> Result<Self> {
        Ok(Self {
            ssid: String::try_from(ssid).map_err(|()| Error::CredentialTooLong {
                field: "WIFI_SSID",
                max: 32,
            })?,
            password: String::try_from(password).map_err(|()| Error::CredentialTooLong {
                field: "WIFI_PASSWORD",
                max: 64,
            })?,
        })
    }

    /// True when no SSID was configured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ssid.is_empty()
    }
}

/// Everything `build.rs` injected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Secrets {
    pub wifi: WifiCredentials,
    pub weather_api_token: &'static str,
}

impl Secrets {
    /// Collect the compile-time credentials.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CredentialTooLong`] if the SSID or password does not fit.
    pub fn from_build_env() -> Result<Self> {
        Ok(Self {
            wifi: WifiCredentials::new(WIFI_SSID, WIFI_PASSWORD)?,
            weather_api_token: WEATHER_API_TOKEN,
        })
    }
}
