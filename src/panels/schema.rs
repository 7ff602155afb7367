//! Static settings schema
//!
//! Every parameter-backed row the panels show, as `const` tables. Bounds,
//! steps and display transforms mirror what the vehicle processes expect to
//! find in the store.

use crate::controls::{
    ActionSpec, ButtonEffect, ButtonSpec, DisplayTransform, Effect, StepperSpec, SystemAction,
    ToggleSpec,
};

/// Selects which lateral tuning block the Tuning panel shows
pub const LATERAL_CONTROL_KEY: &str = "LateralControlMethod";
/// Set on dashcam-only installs; changes the brand shown in the UI
pub const PASSIVE_KEY: &str = "Passive";

/// Brand shown for a dashcam-only install
pub const BRAND_DASHCAM: &str = "dashcam";
/// Brand shown for a full install
pub const BRAND_OPENPILOT: &str = "openpilot";

// Display labels

const AUTO_SHUTDOWN_LABELS: &[&str] = &[
    "Always On", "Instant", "30s", "1m", "3m", "5m", "10m", "30m", "1h", "3h", "5h",
];
const RECORDING_QUALITY_LABELS: &[&str] = &["Low", "Medium", "High", "Ultra"];
const CRUISE_PROFILE_LABELS: &[&str] = &["follow", "relaxed"];
const CRUISE_MODE_LABELS: &[&str] = &["OpenPilot", "Dist+Curve", "Dist Only", "One Way 1 Lane"];
const LANE_CHANGE_DELAY_LABELS: &[&str] =
    &["Nudge/Manual", "Instant", "0.5s", "1s", "1.5s", "2s"];
const LATERAL_CONTROL_LABELS: &[&str] = &["PID", "INDI", "LQR"];

const VOLUME_NAMES: &[(i32, &str)] = &[(0, "Default"), (-10, "Mute")];
const BRIGHTNESS_NAMES: &[(i32, &str)] = &[(0, "Auto")];
const ANGLE_LIMIT_NAMES: &[(i32, &str)] = &[(80, "No Limit")];

// Toggles panel

/// Rows of the Toggles panel, in display order
pub const TOGGLES: &[ToggleSpec] = &[
    ToggleSpec::new(
        "OpenpilotEnabledToggle",
        "Enable openpilot",
        "Use the openpilot system for adaptive cruise control and lane keep assist. \
         Changing this setting takes effect when the car is powered off.",
    ),
    ToggleSpec::new("IsLdwEnabled", "Enable Lane Departure Warnings", ""),
    ToggleSpec::new(
        "IsRHD",
        "Enable Right-Hand Drive",
        "Follow left-hand traffic rules and monitor the driver in the right seat.",
    ),
    ToggleSpec::new("IsMetric", "Use Metric System", "Display speed in km/h instead of mph."),
    ToggleSpec::new(
        "CommunityFeaturesToggle",
        "Enable Community Features",
        "Use features from the open source community that are not maintained or supported.",
    ),
    ToggleSpec::new(
        "RecordFront",
        "Record and Upload Driver Camera",
        "Upload data from the driver facing camera to improve driver monitoring.",
    )
    .locked_by("RecordFrontLock"),
    ToggleSpec::new(
        "EndToEndToggle",
        "Disable use of lanelines (Alpha)",
        "Drive like a human would instead of following lane lines.",
    ),
    ToggleSpec::new(
        "OpkrEnableDriverMonitoring",
        "Enable Driver Monitoring",
        "Use driver monitoring.",
    ),
    ToggleSpec::new(
        "OpkrEnableLogger",
        "Enable Logging and Upload",
        "Record drive logs and send them to the server.",
    ),
];

/// Shown after `EndToEndToggle` on devices with a wide-angle camera
pub const WIDE_CAMERA: ToggleSpec = ToggleSpec::new(
    "EnableWideCamera",
    "Enable use of Wide Angle Camera",
    "Use wide angle camera for driving and ui. Only takes effect after reboot.",
);

// Device panel

/// Preview the driver camera
pub const DRIVER_VIEW: ButtonSpec = ButtonSpec {
    key: "IsDriverViewEnabled",
    title: "Driver Camera View",
    description: "Preview the driver facing camera to find the best mounting position. \
                  The car must be off.",
    caption_off: "Preview",
    caption_on: "Previewing",
    effect: ButtonEffect::Set,
    offroad_only: true,
};

/// Device panel actions that only work while the car is off
pub const DEVICE_OFFROAD_ACTIONS: &[ActionSpec] = &[
    ActionSpec {
        title: "Calibration Info",
        button: "Check",
        description: "The device must be mounted within 4° left or right and within 5° up or down.",
        prompt: "[within 4° left/right and 5° up/down]",
        effects: &[],
        offroad_only: true,
    },
    ActionSpec {
        title: "Review Training Guide",
        button: "Review",
        description: "Review the rules, features and limitations of openpilot.",
        prompt: "Are you sure you want to review the training guide?",
        effects: &[Effect::Remove("CompletedTrainingVersion")],
        offroad_only: true,
    },
];

/// Uninstall, titled with the brand at build time
pub const UNINSTALL: ActionSpec = ActionSpec {
    title: "Uninstall",
    button: "Uninstall",
    description: "",
    prompt: "Are you sure you want to uninstall?",
    effects: &[Effect::PutBool("DoUninstall", true)],
    offroad_only: true,
};

/// Maintenance and power actions at the bottom of the Device panel
pub const DEVICE_ACTIONS: &[ActionSpec] = &[
    ActionSpec {
        title: "Reset Calibration",
        button: "Reset",
        description: "",
        prompt: "Are you sure you want to reset calibration? The device will reboot.",
        effects: &[
            Effect::Remove("CalibrationParams"),
            Effect::System(SystemAction::Reboot),
        ],
        offroad_only: false,
    },
    ActionSpec {
        title: "Initialize Parameters",
        button: "Run",
        description: "",
        prompt: "Restore all parameters to their initial values. Continue?",
        effects: &[Effect::System(SystemAction::RunScript("init_param.sh"))],
        offroad_only: false,
    },
    ActionSpec {
        title: "Load Preset 1",
        button: "Load",
        description: "",
        prompt: "Load preset 1?",
        effects: &[Effect::System(SystemAction::RunScript("load_preset1.sh"))],
        offroad_only: false,
    },
    ActionSpec {
        title: "Save Preset 1",
        button: "Save",
        description: "",
        prompt: "Save preset 1?",
        effects: &[Effect::System(SystemAction::RunScript("save_preset1.sh"))],
        offroad_only: false,
    },
    ActionSpec {
        title: "Load Preset 2",
        button: "Load",
        description: "",
        prompt: "Load preset 2?",
        effects: &[Effect::System(SystemAction::RunScript("load_preset2.sh"))],
        offroad_only: false,
    },
    ActionSpec {
        title: "Save Preset 2",
        button: "Save",
        description: "",
        prompt: "Save preset 2?",
        effects: &[Effect::System(SystemAction::RunScript("save_preset2.sh"))],
        offroad_only: false,
    },
    ActionSpec {
        title: "Reboot",
        button: "Reboot",
        description: "",
        prompt: "Are you sure you want to reboot?",
        effects: &[Effect::System(SystemAction::Reboot)],
        offroad_only: false,
    },
    ActionSpec {
        title: "Power Off",
        button: "Power Off",
        description: "",
        prompt: "Are you sure you want to power off?",
        effects: &[Effect::System(SystemAction::PowerOff)],
        offroad_only: false,
    },
];

// Network panel

/// Preview the driving view
pub const OPENPILOT_VIEW: ButtonSpec = ButtonSpec {
    key: "IsOpenpilotViewEnabled",
    title: "Driving Camera View",
    description: "Preview the road facing camera.",
    caption_off: "Preview",
    caption_on: "Stop",
    effect: ButtonEffect::Flip,
    offroad_only: false,
};

/// Software update and firmware actions
pub const NETWORK_ACTIONS: &[ActionSpec] = &[
    ActionSpec {
        title: "Git Pull",
        button: "Run",
        description: "Apply changes from the remote branch and reboot if anything changed.",
        prompt: "The device reboots automatically after applying changes. Continue?",
        effects: &[Effect::System(SystemAction::RunScript("gitpull.sh"))],
        offroad_only: false,
    },
    ActionSpec {
        title: "Git Reset",
        button: "Run",
        description: "Discard local changes and apply the latest remote commit.",
        prompt: "Local changes will be lost. Continue?",
        effects: &[Effect::System(SystemAction::RunScript("git_reset.sh"))],
        offroad_only: false,
    },
    ActionSpec {
        title: "Cancel Git Pull",
        button: "Run",
        description: "Return to the state before the last pull.",
        prompt: "Revert the last Git Pull. Continue?",
        effects: &[Effect::System(SystemAction::RunScript("gitpull_cancel.sh"))],
        offroad_only: false,
    },
    ActionSpec {
        title: "Panda Flashing",
        button: "Run",
        description: "The panda LED blinks quickly while flashing and the device reboots \
                      when done. Never power off or unplug the device meanwhile.",
        prompt: "Continue with panda flashing?",
        effects: &[Effect::System(SystemAction::RunScript("panda_flashing.sh"))],
        offroad_only: false,
    },
];

// User panel

/// UI settings block
pub const UI_STEPPERS: &[StepperSpec] = &[
    StepperSpec::choice(
        "OpkrAutoShutdown",
        "Device Auto Shutdown",
        "Power off the device this long after the car is turned off.",
        AUTO_SHUTDOWN_LABELS,
    ),
    StepperSpec::raw(
        "OpkrUIVolumeBoost",
        "Volume Control (%)",
        "Adjust the UI volume.",
        -10,
        100,
        10,
    )
    .with_display(DisplayTransform::RawWithNames(VOLUME_NAMES)),
    StepperSpec::raw(
        "OpkrUIBrightness",
        "Brightness Control (%)",
        "Adjust the screen brightness.",
        0,
        100,
        5,
    )
    .with_display(DisplayTransform::RawWithNames(BRIGHTNESS_NAMES)),
    StepperSpec::raw(
        "OpkrBatteryChargingMin",
        "Battery Min Charge (%)",
        "Start charging below this level.",
        10,
        90,
        1,
    ),
    StepperSpec::raw(
        "OpkrBatteryChargingMax",
        "Battery Max Charge (%)",
        "Stop charging above this level.",
        10,
        90,
        1,
    ),
    StepperSpec::raw(
        "RecordingCount",
        "Recording Files Kept",
        "Maximum number of recorded files.",
        5,
        300,
        5,
    ),
    StepperSpec::choice(
        "RecordingQuality",
        "Recording Quality",
        "Video quality of the screen recorder.",
        RECORDING_QUALITY_LABELS,
    ),
];

/// Remove every recorded video
pub const DELETE_RECORDINGS: ActionSpec = ActionSpec {
    title: "Delete All Recordings",
    button: "Run",
    description: "Delete every saved recording.",
    prompt: "Delete every saved recording. Continue?",
    effects: &[Effect::System(SystemAction::DeleteRecordings)],
    offroad_only: false,
};

/// Driving settings block
pub const DRIVING_STEPPERS: &[StepperSpec] = &[
    StepperSpec::choice(
        "OpkrVariableCruiseProfile",
        "Cruise Acceleration Profile",
        "Acceleration profile of the variable cruise.",
        CRUISE_PROFILE_LABELS,
    ),
    StepperSpec::choice(
        "CruiseStatemodeSelInit",
        "Cruise Start Mode",
        "Cruise mode selected when the system starts.",
        CRUISE_MODE_LABELS,
    ),
    StepperSpec::raw(
        "OpkrLaneChangeSpeed",
        "Lane Change Speed",
        "Minimum speed for an assisted lane change.",
        30,
        160,
        5,
    ),
    StepperSpec::choice(
        "OpkrAutoLaneChangeDelay",
        "Auto Lane Change Delay",
        "Delay before an automatic lane change starts.",
        LANE_CHANGE_DELAY_LABELS,
    ),
    StepperSpec::raw(
        "LeftCurvOffsetAdj",
        "Left Curve Offset",
        "Shift the path in left curves.",
        -30,
        30,
        1,
    ),
    StepperSpec::raw(
        "RightCurvOffsetAdj",
        "Right Curve Offset",
        "Shift the path in right curves.",
        -30,
        30,
        1,
    ),
    StepperSpec::raw(
        "OpkrMaxAngleLimit",
        "Max Steering Angle",
        "Disengage steering above this angle.",
        80,
        360,
        10,
    )
    .with_display(DisplayTransform::RawWithNames(ANGLE_LIMIT_NAMES)),
    StepperSpec::fixed(
        "OpkrSteerAngleCorrection",
        "Steering Angle Correction",
        "Offset added to the measured steering angle.",
        -50,
        50,
        1,
        1,
    ),
    StepperSpec::raw(
        "OpkrSpeedLimitOffset",
        "Speed Limit Offset",
        "Added to the detected speed limit.",
        0,
        10,
        1,
    ),
];

/// Install the bundled calibration for engagement checks
pub const FORCE_CALIBRATION: ActionSpec = ActionSpec {
    title: "Force Calibration",
    button: "Run",
    description: "Set a calibration without driving, to check engagement after a reset.",
    prompt: "Calibration will be forced. Reset it before driving on the road.",
    effects: &[Effect::System(SystemAction::ForceCalibration)],
    offroad_only: false,
};

/// Panda safety limits
pub const PANDA_STEPPERS: &[StepperSpec] = &[
    StepperSpec::raw("MaxSteer", "MAX_STEER", "", 384, 1000, 2),
    StepperSpec::raw("MaxRTDelta", "RT_DELTA", "", 50, 500, 2),
    StepperSpec::raw("MaxRateUp", "MAX_RATE_UP", "", 3, 7, 1),
    StepperSpec::raw("MaxRateDown", "MAX_RATE_DOWN", "", 7, 15, 1),
];

/// Panda and monitoring helper scripts
pub const PANDA_ACTIONS: &[ActionSpec] = &[
    ActionSpec {
        title: "Optimize Panda Values",
        button: "Run",
        description: "Set the panda values to their recommended settings.",
        prompt: "Optimize the panda values?",
        effects: &[Effect::System(SystemAction::RunScript("p_edit.sh"))],
        offroad_only: false,
    },
    ActionSpec {
        title: "Optimize Monitoring",
        button: "Run",
        description: "Adjust driver monitoring for night driving and tunnels.",
        prompt: "Optimize monitoring for night driving and tunnels?",
        effects: &[Effect::System(SystemAction::RunScript("m_edit.sh"))],
        offroad_only: false,
    },
];

/// Models accepted by the forced car recognition row
pub const CAR_MODELS: &[&str] = &[
    "GENESIS",
    "GENESIS_G70",
    "GENESIS_G80",
    "GENESIS_G90",
    "AVANTE",
    "I30",
    "SONATA",
    "SONATA_HEV",
    "SONATA19",
    "SONATA19_HEV",
    "KONA",
    "KONA_EV",
    "KONA_HEV",
    "IONIQ_EV",
    "IONIQ_HEV",
    "SANTA_FE",
    "PALISADE",
    "VELOSTER",
    "GRANDEUR",
    "GRANDEUR_HEV",
    "NEXO",
    "K3",
    "K5",
    "K5_HEV",
    "K7",
    "K7_HEV",
    "SPORTAGE",
    "SORENTO",
    "STINGER",
    "NIRO_EV",
    "NIRO_HEV",
    "CEED",
    "SELTOS",
];

// Tuning panel

/// General steering tuning
pub const TUNING_STEPPERS: &[StepperSpec] = &[
    StepperSpec::fixed("CameraOffsetAdj", "Camera Offset", "", -300, 300, 5, 3),
    StepperSpec::fixed("SteerRatioAdj", "SteerRatio", "", 80, 200, 1, 1),
    StepperSpec::fixed("SteerRatioMaxAdj", "SteerRatio Max", "", 100, 250, 1, 1),
    StepperSpec::fixed("SteerActuatorDelayAdj", "SteerActuatorDelay", "", 0, 100, 1, 2),
    StepperSpec::fixed("SteerRateCostAdj", "SteerRateCost", "", 1, 200, 1, 2),
    StepperSpec::fixed("SteerLimitTimerAdj", "SteerLimitTimer", "", 0, 300, 1, 2),
    StepperSpec::fixed("TireStiffnessFactorAdj", "TireStiffnessFactor", "", 1, 200, 1, 2),
    StepperSpec::raw("SteerMaxBaseAdj", "SteerMax Base", "", 200, 384, 2),
    StepperSpec::raw("SteerMaxAdj", "SteerMax Max", "", 254, 1000, 2),
    StepperSpec::fixed("SteerMaxvAdj", "SteerMaxV", "", 10, 30, 1, 1),
    StepperSpec::raw("SteerDeltaUpBaseAdj", "SteerDeltaUp Base", "", 2, 7, 1),
    StepperSpec::raw("SteerDeltaUpAdj", "SteerDeltaUp Max", "", 3, 7, 1),
    StepperSpec::raw("SteerDeltaDownBaseAdj", "SteerDeltaDown Base", "", 3, 15, 1),
    StepperSpec::raw("SteerDeltaDownAdj", "SteerDeltaDown Max", "", 7, 15, 1),
    StepperSpec::raw("SteerThreshold", "SteerThreshold", "", 50, 300, 10),
];

/// Lateral controller selector
pub const LATERAL_CONTROL: StepperSpec = StepperSpec::choice(
    LATERAL_CONTROL_KEY,
    "Lateral Control",
    "Steering controller used while engaged. Reopen the panel to see its values.",
    LATERAL_CONTROL_LABELS,
);

/// PID gains, shown when `LateralControlMethod` is 0
pub const PID_STEPPERS: &[StepperSpec] = &[
    StepperSpec::fixed("PidKp", "Kp", "", 1, 50, 1, 2),
    StepperSpec::fixed("PidKi", "Ki", "", 1, 100, 1, 3),
    StepperSpec::fixed("PidKd", "Kd", "", 0, 300, 1, 2),
    StepperSpec::fixed("PidKf", "Kf", "", 1, 50, 1, 5),
    StepperSpec::fixed("IgnoreZone", "IgnoreZone", "", 0, 30, 1, 1),
];

/// INDI gains, shown when `LateralControlMethod` is 1
pub const INDI_STEPPERS: &[StepperSpec] = &[
    StepperSpec::fixed("InnerLoopGain", "InnerLoopGain", "", 1, 200, 1, 1),
    StepperSpec::fixed("OuterLoopGain", "OuterLoopGain", "", 1, 200, 1, 1),
    StepperSpec::fixed("TimeConstant", "TimeConstant", "", 1, 200, 1, 1),
    StepperSpec::fixed(
        "ActuatorEffectiveness",
        "ActuatorEffectiveness",
        "",
        1,
        200,
        1,
        1,
    ),
];

/// LQR gains, shown when `LateralControlMethod` is 2
pub const LQR_STEPPERS: &[StepperSpec] = &[
    StepperSpec::raw("Scale", "Scale", "", 50, 5000, 50),
    StepperSpec::fixed("LqrKi", "Ki", "", 1, 100, 1, 3),
    StepperSpec::fixed("DcGain", "DcGain", "", 1, 50, 1, 4),
];

/// Gains for a stored `LateralControlMethod` value
///
/// Values outside 0..=2 show no gains, like an unset selector.
pub fn lateral_steppers(method: i32) -> &'static [StepperSpec] {
    match method {
        0 => PID_STEPPERS,
        1 => INDI_STEPPERS,
        2 => LQR_STEPPERS,
        _ => &[],
    }
}

/// Every stepper in the schema
pub fn all_steppers() -> impl Iterator<Item = &'static StepperSpec> {
    UI_STEPPERS
        .iter()
        .chain(DRIVING_STEPPERS)
        .chain(PANDA_STEPPERS)
        .chain(TUNING_STEPPERS)
        .chain(std::iter::once(&LATERAL_CONTROL))
        .chain(PID_STEPPERS)
        .chain(INDI_STEPPERS)
        .chain(LQR_STEPPERS)
}
