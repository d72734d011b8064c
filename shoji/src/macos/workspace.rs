use objc2_app_kit::{
    NSApplicationActivationOptions, NSApplicationActivationPolicy, NSRunningApplication,
    NSWorkspace,
};

#[derive(Debug, Clone)]
pub struct RunningApp {
    pub pid: i32,
    pub name: String,
    pub is_hidden: bool,
}

/// Regular (Dock-visible) applications in launch order.
pub fn running_apps() -> Vec<RunningApp> {
    let workspace = NSWorkspace::sharedWorkspace();

    let mut result = Vec::new();
    for app in workspace.runningApplications() {
        if app.activationPolicy() != NSApplicationActivationPolicy::Regular {
            continue;
        }

        let pid = app.processIdentifier();
        if pid <= 0 {
            continue;
        }

        result.push(RunningApp {
            pid,
            name: app.localizedName().map_or(String::new(), |n| n.to_string()),
            is_hidden: app.isHidden(),
        });
    }
    result
}

pub fn app_name(pid: i32) -> String {
    NSRunningApplication::runningApplicationWithProcessIdentifier(pid)
        .and_then(|app| app.localizedName())
        .map_or(String::new(), |n| n.to_string())
}

/// Brings the application with `pid` to the front. Returns false if it is gone.
pub fn activate_app(pid: i32) -> bool {
    let Some(app) = NSRunningApplication::runningApplicationWithProcessIdentifier(pid) else {
        return false;
    };
    app.activateWithOptions(NSApplicationActivationOptions::ActivateAllWindows)
}
