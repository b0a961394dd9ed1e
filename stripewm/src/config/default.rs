use super::{BaseCommand, Config, Keybind, Scratchpad};

const DEFAULT_TERMINAL: &str = "xterm";

impl Default for Config {
    fn default() -> Self {
        let mut keybinds = vec![
            // Mod + p => application launcher
            Keybind {
                command: BaseCommand::Execute,
                value: "dmenu_run".to_owned(),
                modifier: vec!["modkey".to_owned()],
                key: "p".to_owned(),
            },
            // Mod + Shift + Return => a shell
            Keybind {
                command: BaseCommand::Execute,
                value: DEFAULT_TERMINAL.to_owned(),
                modifier: vec!["modkey".to_owned(), "Shift".to_owned()],
                key: "Return".to_owned(),
            },
            // Mod + Shift + q => close the focused window
            Keybind {
                command: BaseCommand::CloseWindow,
                value: String::default(),
                modifier: vec!["modkey".to_owned(), "Shift".to_owned()],
                key: "q".to_owned(),
            },
            // Mod + Shift + x => exit stripewm
            Keybind {
                command: BaseCommand::Terminate,
                value: String::default(),
                modifier: vec!["modkey".to_owned(), "Shift".to_owned()],
                key: "x".to_owned(),
            },
            Keybind {
                command: BaseCommand::ToggleFullscreen,
                value: String::default(),
                modifier: vec!["modkey".to_owned()],
                key: "f".to_owned(),
            },
            Keybind {
                command: BaseCommand::ToggleFloating,
                value: String::default(),
                modifier: vec!["modkey".to_owned(), "Shift".to_owned()],
                key: "f".to_owned(),
            },
            Keybind {
                command: BaseCommand::FocusNextWindow,
                value: String::default(),
                modifier: vec!["modkey".to_owned()],
                key: "j".to_owned(),
            },
            Keybind {
                command: BaseCommand::FocusPreviousWindow,
                value: String::default(),
                modifier: vec!["modkey".to_owned()],
                key: "k".to_owned(),
            },
            Keybind {
                command: BaseCommand::IncreaseMasterArea,
                value: String::default(),
                modifier: vec!["modkey".to_owned()],
                key: "l".to_owned(),
            },
            Keybind {
                command: BaseCommand::DecreaseMasterArea,
                value: String::default(),
                modifier: vec!["modkey".to_owned()],
                key: "h".to_owned(),
            },
            Keybind {
                command: BaseCommand::IncreaseMasterCount,
                value: String::default(),
                modifier: vec!["modkey".to_owned()],
                key: "i".to_owned(),
            },
            Keybind {
                command: BaseCommand::DecreaseMasterCount,
                value: String::default(),
                modifier: vec!["modkey".to_owned()],
                key: "d".to_owned(),
            },
            Keybind {
                command: BaseCommand::IncreaseSizeInLayout,
                value: String::default(),
                modifier: vec!["modkey".to_owned(), "Shift".to_owned()],
                key: "j".to_owned(),
            },
            Keybind {
                command: BaseCommand::DecreaseSizeInLayout,
                value: String::default(),
                modifier: vec!["modkey".to_owned(), "Shift".to_owned()],
                key: "k".to_owned(),
            },
            Keybind {
                command: BaseCommand::IncreaseGap,
                value: String::default(),
                modifier: vec!["modkey".to_owned(), "Control".to_owned()],
                key: "l".to_owned(),
            },
            Keybind {
                command: BaseCommand::DecreaseGap,
                value: String::default(),
                modifier: vec!["modkey".to_owned(), "Control".to_owned()],
                key: "h".to_owned(),
            },
            Keybind {
                command: BaseCommand::SetLayout,
                value: "TiledMaster".to_owned(),
                modifier: vec!["modkey".to_owned()],
                key: "t".to_owned(),
            },
            Keybind {
                command: BaseCommand::SetLayout,
                value: "VerticalStripes".to_owned(),
                modifier: vec!["modkey".to_owned()],
                key: "v".to_owned(),
            },
            Keybind {
                command: BaseCommand::SetLayout,
                value: "HorizontalStripes".to_owned(),
                modifier: vec!["modkey".to_owned()],
                key: "b".to_owned(),
            },
            Keybind {
                command: BaseCommand::MoveWindowToNextMonitor,
                value: String::default(),
                modifier: vec!["modkey".to_owned(), "Shift".to_owned()],
                key: "period".to_owned(),
            },
            Keybind {
                command: BaseCommand::MoveWindowToPreviousMonitor,
                value: String::default(),
                modifier: vec!["modkey".to_owned(), "Shift".to_owned()],
                key: "comma".to_owned(),
            },
            Keybind {
                command: BaseCommand::ToggleScratchpad,
                value: "term".to_owned(),
                modifier: vec!["modkey".to_owned()],
                key: "grave".to_owned(),
            },
        ];

        // Mod + 1..=9 => jump to desktop, Mod + Shift + 1..=9 => send there.
        for desktop in 1..=9_usize {
            let key = desktop.to_string();
            keybinds.push(Keybind {
                command: BaseCommand::GotoDesktop,
                value: (desktop - 1).to_string(),
                modifier: vec!["modkey".to_owned()],
                key: key.clone(),
            });
            keybinds.push(Keybind {
                command: BaseCommand::SendToDesktop,
                value: (desktop - 1).to_string(),
                modifier: vec!["modkey".to_owned(), "Shift".to_owned()],
                key,
            });
        }

        Self {
            modkey: "Mod4".to_owned(),
            mousekey: "Mod4".to_owned(),
            desktop_names: (1..=9).map(|i| i.to_string()).collect(),
            layout: "TiledMaster".to_owned(),
            nmaster: 1,
            max_nmaster: 8,
            master_area: 0.5,
            master_area_min: 0.1,
            master_area_max: 0.9,
            master_area_step: 0.05,
            gap_size: 0,
            gap_size_min: 0,
            gap_size_max: 64,
            gap_size_step: 2,
            layout_size_step: 40.0,
            border_width: 2,
            default_border_color: "#444444".to_owned(),
            focused_border_color: "#005577".to_owned(),
            urgent_border_color: "#ad2b2b".to_owned(),
            motion_fps: 60,
            move_button: "Button1".to_owned(),
            resize_button: "Button3".to_owned(),
            show_titlebars: false,
            titlebar_height: 18,
            scratchpads: vec![Scratchpad {
                name: "term".to_owned(),
                command: DEFAULT_TERMINAL.to_owned(),
                width_ratio: 0.6,
                height_ratio: 0.6,
            }],
            keybinds,
        }
    }
}
