// Copyright 2026 The JMSQ Admin Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Connection URL decomposition for report titles

use once_cell::sync::Lazy;
use regex::Captures;
use regex::Regex;
use serde::Serialize;

/// Parts of an admin connection URL such as `t3://adminhost:7001`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionUrl {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protocol: Option<String>,
    pub hostname: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl ConnectionUrl {
    /// Decomposes `url`. Never fails: unrecognised input becomes the hostname.
    pub fn parse(url: &str) -> Self {
        URL_SHAPES
            .iter()
            .find_map(|(pattern, extract)| pattern.captures(url).and_then(|caps| extract(&caps)))
            .unwrap_or_else(|| Self {
                protocol: None,
                hostname: url.to_string(),
                port: None,
                path: None,
            })
    }
}

type UrlExtractor = fn(&Captures<'_>) -> Option<ConnectionUrl>;

static URL_SHAPES: Lazy<[(Regex, UrlExtractor); 3]> = Lazy::new(|| {
    [
        (url_pattern(r"^(\w+)://(.+):([0-9]+)/?$"), scheme_host_port),
        (url_pattern(r"^(\w+)://(.+):([0-9]+)/(\w*)$"), scheme_host_port_path),
        (url_pattern(r"^(\w+)://(.+)/(\w+)$"), scheme_host_path),
    ]
});

fn url_pattern(pattern: &str) -> Regex {
    Regex::new(pattern).expect("connection url pattern is valid")
}

// a port that does not fit u16 disqualifies the shape
fn scheme_host_port(caps: &Captures<'_>) -> Option<ConnectionUrl> {
    Some(ConnectionUrl {
        protocol: Some(caps[1].to_string()),
        hostname: caps[2].to_string(),
        port: Some(caps[3].parse().ok()?),
        path: None,
    })
}

fn scheme_host_port_path(caps: &Captures<'_>) -> Option<ConnectionUrl> {
    Some(ConnectionUrl {
        protocol: Some(caps[1].to_string()),
        hostname: caps[2].to_string(),
        port: Some(caps[3].parse().ok()?),
        path: Some(caps[4].to_string()).filter(|path| !path.is_empty()),
    })
}

fn scheme_host_path(caps: &Captures<'_>) -> Option<ConnectionUrl> {
    Some(ConnectionUrl {
        protocol: Some(caps[1].to_string()),
        hostname: caps[2].to_string(),
        port: None,
        path: Some(caps[3].to_string()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scheme_host_port() {
        assert_eq!(
            ConnectionUrl::parse("t3://adminhost:7001"),
            ConnectionUrl {
                protocol: Some("t3".into()),
                hostname: "adminhost".into(),
                port: Some(7001),
                path: None,
            }
        );
    }

    #[test]
    fn trailing_slash_is_ignored() {
        let url = ConnectionUrl::parse("t3s://adminhost:7002/");
        assert_eq!(url.port, Some(7002));
        assert_eq!(url.path, None);
    }

    #[test]
    fn scheme_host_port_path() {
        assert_eq!(
            ConnectionUrl::parse("http://adminhost:7001/console"),
            ConnectionUrl {
                protocol: Some("http".into()),
                hostname: "adminhost".into(),
                port: Some(7001),
                path: Some("console".into()),
            }
        );
    }

    #[test]
    fn scheme_host_path() {
        assert_eq!(
            ConnectionUrl::parse("http://adminhost/console"),
            ConnectionUrl {
                protocol: Some("http".into()),
                hostname: "adminhost".into(),
                port: None,
                path: Some("console".into()),
            }
        );
    }

    #[test]
    fn fallback_to_hostname() {
        for raw in ["adminhost", "", "adminhost:7001", "t3://adminhost"] {
            let url = ConnectionUrl::parse(raw);
            assert_eq!(url.hostname, raw);
            assert_eq!(url.protocol, None);
            assert_eq!(url.port, None);
        }
    }

    #[test]
    fn oversized_port_falls_through() {
        let url = ConnectionUrl::parse("t3://adminhost:99999");
        assert_eq!(url.hostname, "t3://adminhost:99999");
        assert_eq!(url.port, None);
    }

    #[test]
    fn json_omits_missing_parts() {
        let json = serde_json::to_string(&ConnectionUrl::parse("adminhost")).unwrap();
        assert_eq!(json, r#"{"hostname":"adminhost"}"#);
    }
}
