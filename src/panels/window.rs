//! Settings window
//!
//! Builds the six panels from the static schema and tracks which one is
//! open. Controls inside a panel talk to the store directly; the window only
//! handles navigation, the offroad state and rebuilding panels whose layout
//! depends on stored values.

use super::schema;
use crate::config::AppConfig;
use crate::controls::{
    ActionSpec, CarSelector, ConfirmAction, Control, Header, ParamButton, ParamLabel, ParamToggle,
    SshKeys, Stepper, StepperSpec,
};
use crate::params::{SharedParams, parse_int};
use std::path::PathBuf;
use tracing::{debug, info};

/// Panel names in sidebar order
pub const PANEL_NAMES: [&str; 6] = ["Device", "Network", "Toggles", "Info", "User", "Tuning"];

const INFO_PANEL: usize = 3;
const TUNING_PANEL: usize = 5;

/// One page of settings
#[derive(Debug)]
pub struct Panel {
    name: &'static str,
    controls: Vec<Control>,
}

impl Panel {
    fn new(name: &'static str, controls: Vec<Control>) -> Self {
        Self { name, controls }
    }

    /// Sidebar name
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Rows in display order
    pub fn controls(&self) -> &[Control] {
        &self.controls
    }

    /// Mutable access to one row
    pub fn control_mut(&mut self, index: usize) -> Option<&mut Control> {
        self.controls.get_mut(index)
    }

    /// Re-read every row from the store
    pub fn render(&mut self) {
        for control in &mut self.controls {
            control.render();
        }
    }

    fn set_offroad(&mut self, offroad: bool) {
        for control in &mut self.controls {
            control.set_offroad(offroad);
        }
    }
}

/// Sidebar plus the stack of panels
pub struct SettingsWindow {
    params: SharedParams,
    os_version_file: PathBuf,
    panels: Vec<Panel>,
    current: usize,
    offroad: bool,
    wide_camera: bool,
    lateral_method: i32,
}

impl SettingsWindow {
    /// Build every panel; the configured start panel is opened
    pub fn new(params: SharedParams, config: &AppConfig) -> Self {
        let lateral_method = parse_int(&params.get(schema::LATERAL_CONTROL_KEY));
        let mut window = Self {
            os_version_file: config.paths.os_version_file.clone(),
            panels: Vec::with_capacity(PANEL_NAMES.len()),
            current: 0,
            offroad: config.preferences.start_offroad,
            wide_camera: config.hardware.wide_camera,
            lateral_method,
            params,
        };

        window.panels = vec![
            window.device_panel(),
            window.network_panel(),
            window.toggles_panel(),
            window.info_panel(),
            window.user_panel(),
            window.tuning_panel(),
        ];
        let offroad = window.offroad;
        for panel in &mut window.panels {
            panel.set_offroad(offroad);
        }
        window.select(config.preferences.start_panel);
        window
    }

    /// All panels in sidebar order
    pub fn panels(&self) -> &[Panel] {
        &self.panels
    }

    /// Index of the open panel
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// The open panel
    pub fn current(&self) -> &Panel {
        &self.panels[self.current]
    }

    /// The open panel, mutably
    pub fn current_mut(&mut self) -> &mut Panel {
        &mut self.panels[self.current]
    }

    /// Open panel `index`; out-of-range indices are ignored
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.panels.len() {
            debug!("No panel {}", index);
            return false;
        }
        self.current = index;
        true
    }

    /// Whether the car is off
    pub fn is_offroad(&self) -> bool {
        self.offroad
    }

    /// Enable or disable offroad-only buttons
    pub fn set_offroad(&mut self, offroad: bool) {
        if self.offroad != offroad {
            info!("Offroad transition: {}", offroad);
        }
        self.offroad = offroad;
        for panel in &mut self.panels {
            panel.set_offroad(offroad);
        }
    }

    /// Re-read all rows after the panel is shown again
    ///
    /// The Info panel is rebuilt every time. The Tuning panel is rebuilt when
    /// the stored lateral control method differs from the one it was built for.
    pub fn refresh(&mut self) {
        let method = parse_int(&self.params.get(schema::LATERAL_CONTROL_KEY));
        if method != self.lateral_method {
            info!(
                "Lateral control changed from {} to {}, rebuilding tuning panel",
                self.lateral_method, method
            );
            self.lateral_method = method;
            self.panels[TUNING_PANEL] = self.tuning_panel();
        }
        self.panels[INFO_PANEL] = self.info_panel();

        let offroad = self.offroad;
        for panel in &mut self.panels {
            panel.set_offroad(offroad);
            panel.render();
        }
    }

    fn brand(&self) -> &'static str {
        if self.params.get_bool(schema::PASSIVE_KEY) {
            schema::BRAND_DASHCAM
        } else {
            schema::BRAND_OPENPILOT
        }
    }

    fn action(&self, spec: ActionSpec) -> Control {
        Control::Action(ConfirmAction::new(spec, self.params.clone()))
    }

    fn steppers(&self, specs: &'static [StepperSpec]) -> Vec<Control> {
        specs
            .iter()
            .map(|spec| Control::Stepper(Stepper::new(*spec, self.params.clone())))
            .collect()
    }

    fn device_panel(&self) -> Panel {
        let p = &self.params;
        let uninstall = ActionSpec {
            title: if self.brand() == schema::BRAND_DASHCAM {
                "Uninstall dashcam"
            } else {
                "Uninstall openpilot"
            },
            ..schema::UNINSTALL
        };

        let mut controls = vec![
            Control::Label(ParamLabel::param("Dongle ID", "DongleId", p.clone())),
            Control::Label(ParamLabel::param("Serial", "HardwareSerial", p.clone())),
            Control::Button(ParamButton::new(schema::DRIVER_VIEW, p.clone())),
        ];
        controls.extend(
            schema::DEVICE_OFFROAD_ACTIONS
                .iter()
                .map(|spec| self.action(*spec)),
        );
        controls.push(self.action(uninstall));
        controls.extend(schema::DEVICE_ACTIONS.iter().map(|spec| self.action(*spec)));
        Panel::new(PANEL_NAMES[0], controls)
    }

    fn network_panel(&self) -> Panel {
        let mut controls = vec![
            Control::Button(ParamButton::new(schema::OPENPILOT_VIEW, self.params.clone())),
            Control::Ssh(SshKeys::new(self.params.clone())),
            Control::Label(
                ParamLabel::param("Git Commit", "GitCommit", self.params.clone()).truncated(10),
            ),
        ];
        controls.extend(schema::NETWORK_ACTIONS.iter().map(|spec| self.action(*spec)));
        Panel::new(PANEL_NAMES[1], controls)
    }

    fn toggles_panel(&self) -> Panel {
        let mut specs = schema::TOGGLES.to_vec();
        if self.wide_camera {
            let at = specs
                .iter()
                .position(|spec| spec.key == "EndToEndToggle")
                .map_or(specs.len(), |i| i + 1);
            specs.insert(at, schema::WIDE_CAMERA);
        }
        let controls = specs
            .into_iter()
            .map(|spec| Control::Toggle(ParamToggle::new(spec, self.params.clone())))
            .collect();
        Panel::new(PANEL_NAMES[2], controls)
    }

    fn info_panel(&self) -> Panel {
        let p = &self.params;
        let os_version = std::fs::read_to_string(&self.os_version_file).unwrap_or_else(|e| {
            debug!(
                "No OS version at {}: {}",
                self.os_version_file.display(),
                e
            );
            String::new()
        });

        let controls = vec![
            Control::Label(
                ParamLabel::param("Version", "Version", p.clone())
                    .truncated(14)
                    .prefixed(format!("{} v", self.brand())),
            ),
            Control::Label(ParamLabel::param("Git Branch", "GitBranch", p.clone())),
            Control::Label(ParamLabel::param("Git Commit", "GitCommit", p.clone()).truncated(10)),
            Control::Label(ParamLabel::param(
                "Panda Firmware",
                "PandaFirmwareHex",
                p.clone(),
            )),
            Control::Label(ParamLabel::fixed("OS Version", os_version)),
        ];
        Panel::new(PANEL_NAMES[INFO_PANEL], controls)
    }

    fn user_panel(&self) -> Panel {
        let mut controls = vec![Control::Header(Header::new("UI Settings"))];
        controls.extend(self.steppers(schema::UI_STEPPERS));
        controls.push(self.action(schema::DELETE_RECORDINGS));

        controls.push(Control::Header(Header::new("Driving Settings")));
        controls.extend(self.steppers(schema::DRIVING_STEPPERS));

        controls.push(Control::Header(Header::new("Developer")));
        controls.push(self.action(schema::FORCE_CALIBRATION));
        controls.push(Control::Car(CarSelector::new(
            schema::CAR_MODELS,
            self.params.clone(),
        )));

        controls.push(Control::Header(Header::with_note(
            "Panda Values",
            "Caution",
        )));
        controls.extend(self.steppers(schema::PANDA_STEPPERS));
        controls.extend(schema::PANDA_ACTIONS.iter().map(|spec| self.action(*spec)));
        Panel::new(PANEL_NAMES[4], controls)
    }

    fn tuning_panel(&self) -> Panel {
        let mut controls = vec![Control::Header(Header::new("Tuning"))];
        controls.extend(self.steppers(schema::TUNING_STEPPERS));

        controls.push(Control::Header(Header::new("Control")));
        controls.push(Control::Stepper(Stepper::new(
            schema::LATERAL_CONTROL,
            self.params.clone(),
        )));
        controls.extend(self.steppers(schema::lateral_steppers(self.lateral_method)));
        Panel::new(PANEL_NAMES[TUNING_PANEL], controls)
    }
}

impl std::fmt::Debug for SettingsWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SettingsWindow")
            .field("panels", &self.panels)
            .field("current", &self.current)
            .field("offroad", &self.offroad)
            .field("lateral_method", &self.lateral_method)
            .finish_non_exhaustive()
    }
}
