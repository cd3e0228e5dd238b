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

//! Destination identifier resolution
//!
//! Runtime destination names are generated by the broker and look like
//! `IntegrationJmsModule!IntegrationJmsServer@osb_server1@jmsQueue1`. There is no formal
//! grammar for them, so both operations here are best-effort:
//!
//! - [`DestinationNameResolver::short_name`] extracts the name an operator would type
//! - [`DestinationNameResolver::decompose`] splits the identifier into module, broker
//!   server, host server and logical name

use once_cell::sync::Lazy;
use regex::Captures;
use regex::Regex;
use serde::Deserialize;
use serde::Serialize;
use tracing::debug;

/// Hierarchical parts of a destination identifier
///
/// `logical_name` is always present; the other parts only when the identifier carries them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DestinationDescriptor {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub module: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub broker_server: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host_server: Option<String>,
    pub logical_name: String,
}

impl DestinationDescriptor {
    /// A descriptor carrying only the logical name
    pub fn named(logical_name: impl Into<String>) -> Self {
        Self {
            module: None,
            broker_server: None,
            host_server: None,
            logical_name: logical_name.into(),
        }
    }
}

type Extractor = fn(&Captures<'_>) -> DestinationDescriptor;

struct DestinationShape {
    name: &'static str,
    pattern: Regex,
    extract: Extractor,
}

impl DestinationShape {
    fn new(name: &'static str, pattern: &str, extract: Extractor) -> Self {
        Self {
            name,
            pattern: Regex::new(pattern).expect("destination shape pattern is valid"),
            extract,
        }
    }
}

// Most specific first: `module!name` would also match identifiers that carry `@` parts and
// fold them into the name.
static DESTINATION_SHAPES: Lazy<[DestinationShape; 3]> = Lazy::new(|| {
    [
        DestinationShape::new(
            "module!broker_server@host_server@name",
            r"^(.+)!(.+)@(.+)@(.+)$",
            module_broker_host_name,
        ),
        DestinationShape::new("module!broker_server@name", r"^(.+)!(.+)@(.+)$", module_broker_name),
        DestinationShape::new("module!name", r"^(.+)!(.+)$", module_name),
    ]
});

fn module_broker_host_name(caps: &Captures<'_>) -> DestinationDescriptor {
    DestinationDescriptor {
        module: Some(caps[1].to_string()),
        broker_server: Some(caps[2].to_string()),
        host_server: Some(caps[3].to_string()),
        logical_name: caps[4].to_string(),
    }
}

fn module_broker_name(caps: &Captures<'_>) -> DestinationDescriptor {
    DestinationDescriptor {
        module: Some(caps[1].to_string()),
        broker_server: Some(caps[2].to_string()),
        host_server: None,
        logical_name: caps[3].to_string(),
    }
}

fn module_name(caps: &Captures<'_>) -> DestinationDescriptor {
    DestinationDescriptor {
        module: Some(caps[1].to_string()),
        broker_server: None,
        host_server: None,
        logical_name: caps[2].to_string(),
    }
}

/// Resolves broker-generated destination identifiers
pub struct DestinationNameResolver;

impl DestinationNameResolver {
    /// The short, user-facing queue name of `raw`.
    ///
    /// Takes the last `@` segment, or failing that the last `!` segment, then strips any
    /// JNDI-style `a/b/` path prefix. Identifiers without delimiters come back unchanged.
    ///
    /// ```rust
    /// use jmsq_tools::core::destination::DestinationNameResolver;
    ///
    /// assert_eq!(
    ///     DestinationNameResolver::short_name("UMSJMSSystemResource!UMSJMSServer_auto_1@dist_OraSDPM/Queues/OraSDPMEngineCmdQ_auto"),
    ///     "OraSDPMEngineCmdQ_auto"
    /// );
    /// ```
    pub fn short_name(raw: &str) -> &str {
        let name = raw
            .rsplit_once('@')
            .or_else(|| raw.rsplit_once('!'))
            .map_or(raw, |(_, tail)| tail);
        name.rsplit_once('/').map_or(name, |(_, tail)| tail)
    }

    /// Splits `raw` into its hierarchical parts.
    ///
    /// An identifier matching none of the delimited shapes becomes the logical name.
    pub fn decompose(raw: &str) -> DestinationDescriptor {
        for shape in DESTINATION_SHAPES.iter() {
            if let Some(caps) = shape.pattern.captures(raw) {
                debug!(shape = shape.name, raw, "Resolved destination identifier");
                return (shape.extract)(&caps);
            }
        }
        DestinationDescriptor::named(raw)
    }
}
