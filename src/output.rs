use serde::Serialize;

use crate::config::Config;

/// Format a result as minified JSON.
pub fn format_json<T: Serialize>(result: &T) -> String {
    serde_json::to_string(result).unwrap_or_else(|e| format_error(&e))
}

/// Format a result as indented JSON.
pub fn format_pretty<T: Serialize>(result: &T) -> String {
    serde_json::to_string_pretty(result).unwrap_or_else(|e| format_error(&e))
}

/// Format according to the configured output format.
pub fn format_for<T: Serialize>(config: &Config, result: &T) -> String {
    if config.pretty_output() {
        format_pretty(result)
    } else {
        format_json(result)
    }
}

/// Format an error as JSON.
pub fn format_error(err: &dyn std::fmt::Display) -> String {
    format!("{{\"error\":\"{}\"}}", err.to_string().replace('"', "\\\""))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Chunk, ChunkSet, TitlePath};

    fn sample() -> ChunkSet {
        ChunkSet::new(vec![Chunk {
            pages: vec![1, 2],
            texts: vec!["one".into(), "two".into()],
            title_path: TitlePath::new(vec!["Intro".into(), String::new()]),
        }])
    }

    #[test]
    fn chunk_set_is_a_json_list() {
        let json = format_json(&sample());
        assert!(!json.contains('\n'));
        assert_eq!(
            json,
            r#"[{"pages":[1,2],"texts":["one","two"],"title_path":["Intro",""]}]"#
        );
    }

    #[test]
    fn pretty_output_follows_config() {
        let mut cfg = Config::new("/tmp/nonexistent-tocchunk-project");
        assert!(!format_for(&cfg, &sample()).contains('\n'));
        cfg.settings.output.format = "pretty".into();
        assert!(format_for(&cfg, &sample()).contains('\n'));
    }

    #[test]
    fn format_error_escapes_quotes() {
        let json = format_error(&"bad \"thing\"");
        assert_eq!(json, r#"{"error":"bad \"thing\""}"#);
    }
}
