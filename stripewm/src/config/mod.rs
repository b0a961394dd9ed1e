//! stripewm general configuration: the `config.toml` model and its
//! translation into the core `Config` trait.

mod default;
mod keysym;

use std::fs;
use std::fs::File;
use std::io::prelude::*;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use stripewm_core::config::Keybind as CoreKeybind;
use stripewm_core::models::ScratchpadSlot;
use stripewm_core::utils::modmask_lookup::{into_button, into_modmask, Button, ModMask};
use stripewm_core::{Command, LayoutKind};
use xdg::BaseDirectories;

/// What a keybind does; the argument (if any) lives in the bind's `value`
/// field so the TOML stays flat.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BaseCommand {
    Execute,
    CloseWindow,
    ToggleFullscreen,
    ToggleFloating,
    GotoDesktop,
    SendToDesktop,
    FocusNextWindow,
    FocusPreviousWindow,
    IncreaseMasterCount,
    DecreaseMasterCount,
    IncreaseMasterArea,
    DecreaseMasterArea,
    IncreaseGap,
    DecreaseGap,
    IncreaseSizeInLayout,
    DecreaseSizeInLayout,
    SetLayout,
    MoveWindowToNextMonitor,
    MoveWindowToPreviousMonitor,
    ToggleScratchpad,
    Terminate,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Keybind {
    pub command: BaseCommand,
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub modifier: Vec<String>,
    pub key: String,
}

impl Keybind {
    /// Resolve the TOML form into the numeric bind the core matches on.
    /// `modkey` placeholders are substituted before mask resolution.
    fn try_convert(&self, modkey: &str, scratchpads: &[Scratchpad]) -> Result<CoreKeybind> {
        let command = match self.command {
            BaseCommand::Execute => Command::Execute(self.value.clone()),
            BaseCommand::CloseWindow => Command::CloseWindow,
            BaseCommand::ToggleFullscreen => Command::ToggleFullscreen,
            BaseCommand::ToggleFloating => Command::ToggleFloating,
            BaseCommand::GotoDesktop => Command::GotoDesktop(self.parse_index()?),
            BaseCommand::SendToDesktop => Command::SendToDesktop(self.parse_index()?),
            BaseCommand::FocusNextWindow => Command::FocusNextWindow,
            BaseCommand::FocusPreviousWindow => Command::FocusPreviousWindow,
            BaseCommand::IncreaseMasterCount => Command::IncreaseMasterCount,
            BaseCommand::DecreaseMasterCount => Command::DecreaseMasterCount,
            BaseCommand::IncreaseMasterArea => Command::IncreaseMasterArea,
            BaseCommand::DecreaseMasterArea => Command::DecreaseMasterArea,
            BaseCommand::IncreaseGap => Command::IncreaseGap,
            BaseCommand::DecreaseGap => Command::DecreaseGap,
            BaseCommand::IncreaseSizeInLayout => Command::IncreaseSizeInLayout,
            BaseCommand::DecreaseSizeInLayout => Command::DecreaseSizeInLayout,
            BaseCommand::SetLayout => Command::SetLayout(parse_layout(&self.value)?),
            BaseCommand::MoveWindowToNextMonitor => Command::MoveWindowToNextMonitor,
            BaseCommand::MoveWindowToPreviousMonitor => Command::MoveWindowToPreviousMonitor,
            BaseCommand::ToggleScratchpad => {
                let index = scratchpads
                    .iter()
                    .position(|s| s.name == self.value)
                    .with_context(|| format!("unknown scratchpad \"{}\"", self.value))?;
                Command::ToggleScratchpad(index)
            }
            BaseCommand::Terminate => Command::Terminate(if self.value.is_empty() {
                0
            } else {
                self.value
                    .parse()
                    .with_context(|| format!("invalid exit code \"{}\"", self.value))?
            }),
        };
        let keysym = keysym::lookup(&self.key)
            .with_context(|| format!("unknown key \"{}\"", self.key))?;
        let modifier: Vec<String> = self
            .modifier
            .iter()
            .map(|m| {
                if m == "modkey" {
                    modkey.to_string()
                } else {
                    m.clone()
                }
            })
            .collect();
        Ok(CoreKeybind {
            modifier: into_modmask(&modifier),
            keysym,
            command,
        })
    }

    fn parse_index(&self) -> Result<usize> {
        self.value
            .parse()
            .with_context(|| format!("invalid desktop index \"{}\"", self.value))
    }
}

fn parse_layout(name: &str) -> Result<LayoutKind> {
    match name {
        "TiledMaster" => Ok(LayoutKind::TiledMaster),
        "VerticalStripes" => Ok(LayoutKind::VerticalStripes),
        "HorizontalStripes" => Ok(LayoutKind::HorizontalStripes),
        "Floating" => Ok(LayoutKind::Floating),
        _ => bail!("unknown layout \"{name}\""),
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Scratchpad {
    pub name: String,
    pub command: String,
    pub width_ratio: f32,
    pub height_ratio: f32,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct Config {
    pub modkey: String,
    pub mousekey: String,
    pub desktop_names: Vec<String>,
    pub layout: String,
    pub nmaster: u32,
    pub max_nmaster: u32,
    pub master_area: f32,
    pub master_area_min: f32,
    pub master_area_max: f32,
    pub master_area_step: f32,
    pub gap_size: i32,
    pub gap_size_min: i32,
    pub gap_size_max: i32,
    pub gap_size_step: i32,
    pub layout_size_step: f32,
    pub border_width: i32,
    pub default_border_color: String,
    pub focused_border_color: String,
    pub urgent_border_color: String,
    pub motion_fps: u32,
    pub move_button: String,
    pub resize_button: String,
    pub show_titlebars: bool,
    pub titlebar_height: i32,
    pub scratchpads: Vec<Scratchpad>,
    pub keybinds: Vec<Keybind>,
}

/// Load the user config, writing a default file on first run. A file
/// that cannot be read or parsed falls back to the built-in defaults
/// with a loud error, so a typo in a tunable never leaves the user
/// without a window manager.
///
/// # Errors
///
/// Fails when the keybind table cannot be built. A manager with no
/// working binds is unusable, so that is a startup error rather than
/// something to discover on first key press.
pub fn load() -> Result<Config> {
    let path = BaseDirectories::with_prefix("stripewm")?;
    let config_filename = path.place_config_file("config.toml")?;
    if !Path::new(&config_filename).exists() {
        let config = Config::default();
        let toml = toml::to_string(&config)?;
        let mut file = File::create(&config_filename)?;
        file.write_all(toml.as_bytes())?;
        return Ok(config);
    }

    let config = match fs::read_to_string(&config_filename)
        .map_err(anyhow::Error::from)
        .and_then(|contents| toml::from_str::<Config>(&contents).map_err(Into::into))
    {
        Ok(config) => config,
        Err(err) => {
            tracing::error!("unable to load config file, using defaults: {err}");
            Config::default()
        }
    };
    config
        .resolved_keybinds()
        .context("keybind table cannot be built")?;
    Ok(config)
}

impl Config {
    /// # Errors
    ///
    /// Fails when any bind names an unknown key, layout or scratchpad.
    pub fn resolved_keybinds(&self) -> Result<Vec<CoreKeybind>> {
        self.keybinds
            .iter()
            .map(|bind| bind.try_convert(&self.modkey, &self.scratchpads))
            .collect()
    }
}

impl stripewm_core::Config for Config {
    fn desktop_names(&self) -> Vec<String> {
        self.desktop_names.clone()
    }

    fn keybinds(&self) -> Vec<CoreKeybind> {
        match self.resolved_keybinds() {
            Ok(binds) => binds,
            Err(err) => {
                tracing::error!("keybind table invalid, running without binds: {}", err);
                Vec::new()
            }
        }
    }

    fn mousekey(&self) -> ModMask {
        into_modmask(&[self.mousekey.clone()])
    }

    fn create_list_of_scratchpads(&self) -> Vec<ScratchpadSlot> {
        self.scratchpads
            .iter()
            .map(|s| {
                ScratchpadSlot::new(
                    s.name.clone(),
                    s.command.clone(),
                    s.width_ratio,
                    s.height_ratio,
                )
            })
            .collect()
    }

    fn border_width(&self) -> i32 {
        self.border_width
    }

    fn default_border_color(&self) -> String {
        self.default_border_color.clone()
    }

    fn focused_border_color(&self) -> String {
        self.focused_border_color.clone()
    }

    fn urgent_border_color(&self) -> String {
        self.urgent_border_color.clone()
    }

    fn default_layout(&self) -> LayoutKind {
        parse_layout(&self.layout).unwrap_or_default()
    }

    fn default_nmaster(&self) -> u32 {
        self.nmaster
    }

    fn max_nmaster(&self) -> u32 {
        self.max_nmaster
    }

    fn default_master_area(&self) -> f32 {
        self.master_area
    }

    fn master_area_min(&self) -> f32 {
        self.master_area_min
    }

    fn master_area_max(&self) -> f32 {
        self.master_area_max
    }

    fn master_area_step(&self) -> f32 {
        self.master_area_step
    }

    fn default_gap_size(&self) -> i32 {
        self.gap_size
    }

    fn gap_size_min(&self) -> i32 {
        self.gap_size_min
    }

    fn gap_size_max(&self) -> i32 {
        self.gap_size_max
    }

    fn gap_size_step(&self) -> i32 {
        self.gap_size_step
    }

    fn layout_size_step(&self) -> f32 {
        self.layout_size_step
    }

    fn motion_fps(&self) -> u32 {
        self.motion_fps
    }

    fn move_button(&self) -> Button {
        into_button(&self.move_button)
    }

    fn resize_button(&self) -> Button {
        into_button(&self.resize_button)
    }

    fn show_titlebars(&self) -> bool {
        self.show_titlebars
    }

    fn titlebar_height(&self) -> i32 {
        self.titlebar_height
    }
}
