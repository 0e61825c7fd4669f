//! Headless replay of the viewer controller.
//!
//! Loads a content description (the same JSON the web host reports after a
//! glTF load), runs the controller for a number of frames and logs the camera
//! path, idle rotation and hint cue. Useful for tuning framing and idle
//! constants without a browser.
//!
//! ```text
//! viewer-replay <content.json> [--frames N] [--every N] [--config FILE]
//!               [--interact-at FRAME] [--toggle NAME@FRAME]...
//! ```

use anyhow::Context;
use clap::Parser;
use glam::Vec2;
use std::collections::VecDeque;
use std::fs;
use std::path::PathBuf;
use viewer_core::{ContentNode, Frame, SceneHost, Viewer, ViewerConfig};

#[derive(Parser, Debug)]
#[command(author, version, about = "Replay the viewer controller over a content description")]
struct Args {
    /// Content description JSON (as reported by the web host)
    content: PathBuf,

    /// Number of frames to run
    #[arg(long, default_value_t = 600)]
    frames: u32,

    /// Log every Nth frame
    #[arg(long, default_value_t = 30, value_parser = clap::value_parser!(u32).range(1..))]
    every: u32,

    /// JSON config overrides
    #[arg(long)]
    config: Option<PathBuf>,

    /// Frame at which a pointer-down latches the interaction gate
    #[arg(long)]
    interact_at: Option<u32>,

    /// Toggle a part at a frame: NAME@FRAME (repeatable)
    #[arg(long = "toggle", value_parser = parse_toggle)]
    toggles: Vec<(String, u32)>,
}

fn parse_toggle(s: &str) -> Result<(String, u32), String> {
    let (name, frame) = s
        .rsplit_once('@')
        .ok_or_else(|| format!("expected NAME@FRAME, got {s}"))?;
    if name.is_empty() {
        return Err(format!("missing part name in {s}"));
    }
    let frame = frame
        .parse()
        .map_err(|e| format!("bad frame in {s}: {e}"))?;
    Ok((name.to_string(), frame))
}

/// Host that "loads" instantly from the description on disk and logs frames.
struct ReplayHost {
    content: ContentNode,
    pending: VecDeque<String>,
    every: u32,
    frame_index: u32,
}

impl SceneHost for ReplayHost {
    fn clear_content(&mut self) {
        log::info!("[host] clear");
    }

    fn begin_load(&mut self, path: &str) {
        self.pending.push_back(path.to_string());
    }

    fn set_part_visible(&mut self, name: &str, visible: bool) {
        log::info!("[host] {} visible={}", name, visible);
    }

    fn present(&mut self, frame: &Frame) {
        if self.frame_index % self.every == 0 {
            let eye = frame.camera.eye;
            let fwd = frame.camera.forward();
            log::info!(
                "[frame {:>5}] eye=({:.3},{:.3},{:.3}) fwd=({:.2},{:.2},{:.2}) rot_y={:.4} hint={}",
                self.frame_index,
                eye.x,
                eye.y,
                eye.z,
                fwd.x,
                fwd.y,
                fwd.z,
                frame.content_rotation.y,
                if frame.hint.visible {
                    format!("{:+.1}px", frame.hint.offset_px)
                } else {
                    "hidden".to_string()
                }
            );
        }
        self.frame_index += 1;
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let config = match &args.config {
        Some(p) => ViewerConfig::from_json(
            &fs::read_to_string(p).with_context(|| format!("reading config {}", p.display()))?,
        )?,
        None => ViewerConfig::default(),
    };
    let json = fs::read_to_string(&args.content)
        .with_context(|| format!("reading content {}", args.content.display()))?;
    let content = ContentNode::from_json(&json)?;
    let content_path = args.content.to_string_lossy().into_owned();

    let mut host = ReplayHost {
        content,
        pending: VecDeque::new(),
        every: args.every,
        frame_index: 0,
    };
    let mut viewer = Viewer::new(config);
    viewer.load_model(&content_path, &mut host);

    for frame in 0..args.frames {
        while let Some(path) = host.pending.pop_front() {
            viewer.on_content_loaded(&path, host.content.clone())?;
        }
        if args.interact_at == Some(frame) {
            viewer.on_pointer_down(Vec2::ZERO);
            viewer.on_pointer_up();
        }
        for (name, _) in args.toggles.iter().filter(|(_, at)| *at == frame) {
            match viewer.toggle_part(name, &mut host) {
                Ok(_) => {}
                Err(e) => log::warn!("[replay] toggle {}: {}", name, e),
            }
        }
        viewer.tick(&mut host);
    }

    let eye = viewer.camera().eye;
    log::info!(
        "[replay] done after {} frames; eye=({:.3},{:.3},{:.3}) framing={} interacted={}",
        args.frames,
        eye.x,
        eye.y,
        eye.z,
        viewer.is_framing(),
        viewer.has_interacted()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_repeated_toggles_and_defaults() {
        let args = Args::try_parse_from([
            "viewer-replay",
            "boat.json",
            "--toggle",
            "lamp@10",
            "--toggle",
            "hull@eye@20",
        ])
        .unwrap();
        assert_eq!(args.content, PathBuf::from("boat.json"));
        assert_eq!(args.frames, 600);
        assert_eq!(args.every, 30);
        assert_eq!(
            args.toggles,
            vec![("lamp".to_string(), 10), ("hull@eye".to_string(), 20)]
        );
    }

    #[test]
    fn rejects_bad_toggle_and_zero_every() {
        assert!(Args::try_parse_from(["viewer-replay", "a.json", "--toggle", "lamp"]).is_err());
        assert!(Args::try_parse_from(["viewer-replay", "a.json", "--toggle", "@3"]).is_err());
        assert!(Args::try_parse_from(["viewer-replay", "a.json", "--every", "0"]).is_err());
    }

    #[test]
    fn help_is_generated() {
        let err = Args::try_parse_from(["viewer-replay", "--help"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }
}
