// Gesture-driven whiteboard.
// • The window shows a persistent white canvas, not the camera feed.
// • Point the index finger down to write, raise an open palm with the thumb
//   swung out to erase, relax the hand to lift the pen.
// • Without a landmark model the pointer tracker stands in: hold the left
//   mouse button to write, the right to erase.
// • C clears the board. ESC quits.

mod board;
mod camera;
mod config;
mod draw;
mod error;
mod gesture;
mod pose;
mod tracker;
mod types;

use std::env;
use std::time::{Duration, Instant};

use board::Whiteboard;
use camera::CameraCapture;
use config::Config;
use draw::{draw_crosshair, draw_text_5x7, Drawer};
use error::Error;
use gesture::{Gesture, GestureClassifier};
use pose::HandTracker;
use tracker::PointerTracker;
use types::{FrameBuffer, BLACK, WHITE};

fn main() -> Result<(), Error> {
    env_logger::builder()
        .filter_module(env!("CARGO_CRATE_NAME"), log::LevelFilter::Debug)
        .parse_default_env()
        .init();

    /* --- Configuration ---
       Optional TOML path as the only argument; defaults otherwise. */
    let config = match env::args_os().nth(1) {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    let (width, height) = (config.canvas.width, config.canvas.height);

    /* --- Camera + window + board setup --- */
    let mut cam = CameraCapture::new(&config.camera)?;
    let mut drawer = Drawer::new("Airboard", width, height)?;
    let mut board = Whiteboard::new(&config.canvas);
    let classifier = GestureClassifier::new(&config.gesture);

    // One tracker for the whole run. A real hand-landmark backend would be
    // constructed here and injected the same way.
    let mut tracker = PointerTracker::new(config.mirror);

    /* --- Reusable screen buffer ---
       The canvas stays pristine; the crosshair and HUD are composited onto
       this copy each frame. */
    let mut screen = FrameBuffer::filled(width, height, WHITE);

    /* --- HUD / FPS --- */
    let mut last_fps_time = Instant::now();
    let mut frames_this_second: u32 = 0;
    let mut hud_fps_text = String::from("FPS: 0.0");

    let mut gesture = Gesture::Idle;
    let mut anchor: Option<(i32, i32)> = None;

    /* ------------------------------ Main loop ------------------------------ */
    while drawer.is_open() && !drawer.esc_pressed() {
        /* 1) Grab a fresh camera frame; it only feeds the tracker. */
        let frame = cam.next_frame()?;

        /* 2) Inputs */
        tracker.set_input(&drawer, width, height);
        if drawer.c_pressed_once() {
            log::info!("clearing canvas");
            board.clear();
        }

        /* 3) Perception → classification → board mutation.
           No hand means no update at all: the pen state is left as-is. */
        match tracker.detect(&frame)? {
            Some(pose) => {
                let label = classifier.classify(&pose);
                if label != gesture {
                    log::debug!("gesture: {:?} -> {:?}", gesture, label);
                }
                gesture = label;

                let point = pose.anchor(width, height, config.mirror);
                anchor = Some(point);
                board.update(label, point);
            }
            None => {
                anchor = None;
            }
        }

        /* 4) Compose the on-screen image: canvas, then overlays on top. */
        screen.pixels.copy_from_slice(&board.canvas().pixels);

        if let Some((x, y)) = anchor {
            draw_crosshair(&mut screen, x, y, 12, 0x00_FF_CC_33);
        }

        let mode = match (anchor, gesture) {
            (None, _) | (_, Gesture::Idle) => "IDLE",
            (_, Gesture::Writing) => "WRITING",
            (_, Gesture::Erasing) => "ERASING",
        };
        let hud = format!("{mode} | C: CLEAR  ESC: QUIT | {hud_fps_text}");
        draw_text_5x7(&mut screen, 8, 8, &hud, BLACK);

        /* 5) Present to the window. */
        drawer.present(&screen)?;

        /* 6) FPS counter, once per second. */
        frames_this_second += 1;
        let now = Instant::now();
        if now.duration_since(last_fps_time) >= Duration::from_secs(1) {
            let secs = now.duration_since(last_fps_time).as_secs_f32();
            let fps = frames_this_second as f32 / secs;
            log::debug!("FPS: {fps:.1}");
            hud_fps_text = format!("FPS: {fps:.1}");
            frames_this_second = 0;
            last_fps_time = now;
        }
    }

    Ok(())
}
