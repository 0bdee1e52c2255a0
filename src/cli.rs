// SPDX-License-Identifier: GPL-3.0-only

//! CLI commands for capture operations
//!
//! This module provides command-line functionality for:
//! - Taking a single photo
//! - Running an interactive capture session

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::Arc;

use capture_flow::backends::camera::types::CameraFacing;
use capture_flow::backends::camera::SyntheticCamera;
use capture_flow::backends::permissions::StaticPermissions;
use capture_flow::config;
use capture_flow::errors::FlowResult;
use capture_flow::flow::{CaptureFlow, FlowModel, Screen};
use capture_flow::storage::{self, DiskMediaStore};

/// Build the flow the shipped commands run against
fn build_flow(save_dir: PathBuf) -> CaptureFlow {
    let config = config::load();
    let model = FlowModel::with_preferences(config.default_facing, config.capture);

    CaptureFlow::with_model(
        model,
        Arc::new(StaticPermissions::granted()),
        Arc::new(SyntheticCamera::new()),
        Arc::new(DiskMediaStore::new(save_dir)),
    )
}

/// Take a photo and save it
pub fn take_photo(
    facing: Option<String>,
    output: Option<PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    let facing = match facing.as_deref() {
        Some(name) => Some(
            CameraFacing::from_name(name)
                .ok_or_else(|| format!("Unknown facing '{}' (expected front or back)", name))?,
        ),
        None => None,
    };

    // Determine output directory
    let output_dir = if let Some(path) = output.as_ref() {
        if path.is_dir() {
            path.clone()
        } else {
            path.parent()
                .filter(|parent| !parent.as_os_str().is_empty())
                .map(|parent| parent.to_path_buf())
                .unwrap_or_else(storage::default_save_dir)
        }
    } else {
        config::load().resolve_save_dir()
    };

    let mut flow = build_flow(output_dir);
    let rt = tokio::runtime::Runtime::new()?;

    let asset = rt.block_on(async {
        let permissions = flow.start().await;
        if !permissions.both_granted() {
            return Err("Camera or storage access unavailable".into());
        }

        if let Some(facing) = facing
            && facing != flow.model().facing
        {
            flow.toggle_facing().await?;
        }

        println!("Capturing...");
        flow.capture_picture().await?;
        let asset = flow.save_current_image().await?;
        Ok::<_, Box<dyn std::error::Error>>(asset)
    })?;

    // Rename the saved still when the user asked for an exact file path
    if let Some(user_path) = output
        && !user_path.is_dir()
    {
        if let Some(saved_path) = asset.file_path() {
            std::fs::rename(&saved_path, &user_path)?;
            println!("Photo saved: {}", user_path.display());
            return Ok(());
        }
    }

    println!("Photo saved: {}", asset.uri);
    Ok(())
}

/// Run an interactive capture session
pub fn run_session(output: Option<PathBuf>) -> Result<(), Box<dyn std::error::Error>> {
    let save_dir = output.unwrap_or_else(|| config::load().resolve_save_dir());
    let mut flow = build_flow(save_dir);
    let rt = tokio::runtime::Runtime::new()?;

    println!("Capture session. Type 'help' for commands.");

    rt.block_on(flow.start());
    print_screen(&mut flow);

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }

        match line.trim() {
            "" => continue,
            "quit" | "q" | "exit" => break,
            "capture" | "c" => {
                report(rt.block_on(flow.capture_picture()).map(|_| "Captured".into()));
            }
            "save" | "s" => {
                report(
                    rt.block_on(flow.save_current_image())
                        .map(|asset| format!("Saved {}", asset.uri)),
                );
            }
            "retake" | "r" => {
                report(rt.block_on(flow.retake()).map(|_| "Discarded".into()));
            }
            "facing" | "f" => {
                report(
                    rt.block_on(flow.toggle_facing())
                        .map(|facing| format!("Facing {}", facing.display_name())),
                );
            }
            "permissions" | "p" => {
                let permissions = rt.block_on(flow.request_permissions());
                println!(
                    "camera: {}  storage: {}",
                    permissions.camera, permissions.storage
                );
            }
            "retry" => {
                report(
                    rt.block_on(flow.re_request_permissions())
                        .map(|p| format!("camera: {}  storage: {}", p.camera, p.storage)),
                );
            }
            "status" => {}
            "help" | "?" => {
                print_help();
                continue;
            }
            other => {
                println!("Unknown command '{}'. Try 'help'.", other);
                continue;
            }
        }

        print_screen(&mut flow);
    }

    Ok(())
}

fn report(result: FlowResult<String>) {
    match result {
        Ok(message) => println!("{}", message),
        Err(err) => println!("Error: {}", err),
    }
}

fn print_screen(flow: &mut CaptureFlow) {
    if let Some(notice) = flow.take_notice() {
        println!("! {}", notice);
    }

    match flow.screen() {
        Screen::Blank => println!("(resolving permissions)"),
        Screen::PermissionAdvisory { message } => {
            println!("{}", message);
            println!("Type 'retry' to ask again.");
        }
        Screen::Viewfinder { facing } => {
            println!("[viewfinder] facing {}", facing.display_name());
        }
        Screen::Review {
            image_uri,
            save_available,
        } => {
            if save_available {
                println!("[review] {} (save, retake)", image_uri);
            } else {
                println!("[review] {} (retake only, storage unavailable)", image_uri);
            }
        }
    }
}

fn print_help() {
    println!("Commands:");
    println!("  capture (c)      capture a still");
    println!("  save (s)         save the reviewed still");
    println!("  retake (r)       discard the reviewed still");
    println!("  facing (f)       toggle front/back camera");
    println!("  permissions (p)  re-check permissions");
    println!("  retry            prompt again for missing permissions");
    println!("  status           show the current screen");
    println!("  quit (q)         leave the session");
}
