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

//! Operation log at WARN level; one global subscriber per test binary.

use jmsq_tools::log::emit_report;
use jmsq_tools::log::init_logger;
use jmsq_tools::log::run_span;
use jmsq_tools::log::Level;
use jmsq_tools::log::RunId;
use jmsq_tools::tools_config::LogConfig;
use tracing::info;
use tracing::warn;

#[test]
fn reports_reach_the_log_file_below_the_configured_level() {
    let dir = tempfile::tempdir().unwrap();
    let config = LogConfig {
        dir: dir.path().to_path_buf(),
        file_name: "ops.log".to_string(),
        level: "WARN".to_string(),
        console: false,
    };

    let guard = init_logger(&config, &Level::WARN).unwrap();
    {
        let span = run_span(&RunId::from_number(42));
        let _entered = span.enter();
        info!("loading snapshot");
        warn!("snapshot is stale");
        emit_report("REPORT: LIST OF ALL QUEUES\n========== =======\nOrderQ           3");
    }
    drop(guard);

    let log = std::fs::read_to_string(dir.path().join("ops.log")).unwrap();
    assert!(log.contains("REPORT: LIST OF ALL QUEUES"), "log file: {log:?}");
    assert!(log.contains("OrderQ           3"), "log file: {log:?}");
    assert!(!log.contains("loading snapshot"), "log file: {log:?}");

    let warning = log.lines().find(|line| line.contains("snapshot is stale")).unwrap();
    assert!(warning.contains("WARN"));
    assert!(warning.contains("run{id=id0042}"), "line: {warning:?}");
}
