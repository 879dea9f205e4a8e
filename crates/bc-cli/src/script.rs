//! Command script loading and replay

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

use bc_cad::{Command, CommandOutcome, ModelingSession};

/// Counters collected while replaying a script
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScriptReport {
    pub applied: usize,
    pub rejected: usize,
    pub exports: usize,
}

/// Parse a RON list of commands
pub fn parse_script(content: &str) -> Result<Vec<Command>> {
    let commands = ron::from_str(content).context("Invalid command script")?;
    Ok(commands)
}

/// Read and parse a command script file
pub fn load_script(path: &Path) -> Result<Vec<Command>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read script {}", path.display()))?;
    parse_script(&content).with_context(|| format!("Failed to parse {}", path.display()))
}

/// Apply every command in order
///
/// Rejected commands are logged and skipped. Each export overwrites `output`.
pub fn run_script(
    session: &mut ModelingSession,
    commands: Vec<Command>,
    output: &Path,
) -> Result<ScriptReport> {
    let mut report = ScriptReport::default();

    for (index, command) in commands.into_iter().enumerate() {
        let name = command.name();
        match session.apply(command) {
            Ok(CommandOutcome::Exported(bytes)) => {
                fs::write(output, &bytes)
                    .with_context(|| format!("Failed to write {}", output.display()))?;
                info!("Wrote {} bytes to {}", bytes.len(), output.display());
                report.applied += 1;
                report.exports += 1;
            }
            Ok(outcome) => {
                debug!("#{} {}: {:?}", index, name, outcome);
                report.applied += 1;
            }
            Err(e) => {
                debug!("Skipping command #{} ({}): {}", index, name, e);
                report.rejected += 1;
            }
        }
    }

    Ok(report)
}

/// Log what the model looks like after a run
pub fn log_summary(session: &ModelingSession, report: &ScriptReport) {
    let registry = session.registry();
    info!(
        "{} commands applied, {} rejected, {} exports",
        report.applied, report.rejected, report.exports
    );
    info!(
        "Model has {} bodies, {} triangles",
        registry.len(),
        registry.total_triangle_count()
    );
    for body in registry.list() {
        let main = if registry.main_id() == Some(body.id) {
            " (main)"
        } else {
            ""
        };
        info!(
            "  {} {}{} at {}",
            body.name,
            body.geometry().kind_name(),
            main,
            body.transform.position
        );
    }
    info!("Status: {}", session.status());
}

#[cfg(test)]
mod tests {
    use super::*;
    use bc_core::ModelConfig;
    use std::sync::{Arc, Mutex};

    const SCRIPT: &str = r#"[
        StartSketch,
        FacePicked(point: (0.0, 0.5, 0.0), normal: (0.0, 1.0, 0.0)),
        SelectTool(Rectangle(width: 1.0, height: 1.0)),
        PlaceShape(point: (0.0, 0.5, 0.0)),
        Extrude(depth: 2.0),
        FinishSketch,
        Extrude(depth: 2.0),
        ExportMesh,
    ]"#;

    #[test]
    fn test_parse_script() {
        let commands = parse_script(SCRIPT).unwrap();
        assert_eq!(commands.len(), 8);
        assert_eq!(commands[0], Command::StartSketch);
        assert_eq!(commands[7], Command::ExportMesh);
    }

    #[test]
    fn test_parse_script_error() {
        assert!(parse_script("[Explode]").is_err());
        assert!(parse_script("not ron").is_err());
    }

    #[test]
    fn test_run_script_writes_export() {
        let dir = tempfile::tempdir().unwrap();
        let script_path = dir.path().join("model.ron");
        let output = dir.path().join("model.stl");
        fs::write(&script_path, SCRIPT).unwrap();

        let mut session = ModelingSession::new(ModelConfig::default()).unwrap();
        let commands = load_script(&script_path).unwrap();
        let report = run_script(&mut session, commands, &output).unwrap();

        // Extrude while still sketching is rejected and skipped
        assert_eq!(
            report,
            ScriptReport {
                applied: 7,
                rejected: 1,
                exports: 1
            }
        );
        assert_eq!(session.registry().len(), 2);

        let doc = fs::read_to_string(&output).unwrap();
        assert!(doc.starts_with("solid exported\n"));
        assert!(doc.ends_with("endsolid exported\n"));
        assert_eq!(doc.matches("endfacet").count(), 24);
    }

    #[derive(Clone, Default)]
    struct SharedLog(Arc<Mutex<Vec<u8>>>);

    impl std::io::Write for SharedLog {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_rejection_warned_once() {
        let log = SharedLog::default();
        let writer = log.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();

        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("model.stl");
        let report = tracing::subscriber::with_default(subscriber, || {
            let mut session = ModelingSession::new(ModelConfig::default()).unwrap();
            run_script(&mut session, vec![Command::FinishSketch], &output).unwrap()
        });
        assert_eq!(report.rejected, 1);

        let text = String::from_utf8(log.0.lock().unwrap().clone()).unwrap();
        let warnings: Vec<&str> = text.lines().filter(|l| l.contains("WARN")).collect();
        assert_eq!(warnings.len(), 1, "{text}");
        assert!(warnings[0].contains("FinishSketch rejected"));
        assert!(text.contains("Skipping command #0 (FinishSketch)"));
    }

    #[test]
    fn test_missing_script() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_script(&dir.path().join("missing.ron")).is_err());
    }

    #[test]
    fn test_unwritable_output() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("no_such_dir").join("model.stl");
        let mut session = ModelingSession::new(ModelConfig::default()).unwrap();
        assert!(run_script(&mut session, vec![Command::ExportMesh], &output).is_err());
    }
}
