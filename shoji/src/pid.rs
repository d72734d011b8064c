use nix::sys::signal::kill;
use nix::unistd::Pid;
use std::fs;
use std::path::Path;
use std::process;

const PID_FILE: &str = "/tmp/shoji.pid";

/// PID of a daemon that is still alive. Stale or unreadable PID files are removed.
pub fn check_already_running() -> Option<i32> {
    let path = Path::new(PID_FILE);
    let contents = fs::read_to_string(path).ok()?;

    let Ok(pid) = contents.trim().parse::<i32>() else {
        let _ = fs::remove_file(path);
        return None;
    };

    if pid as u32 != process::id() && is_process_running(pid) {
        Some(pid)
    } else {
        let _ = fs::remove_file(path);
        None
    }
}

pub fn write_pid() -> std::io::Result<()> {
    fs::write(PID_FILE, process::id().to_string())
}

pub fn remove_pid() {
    let _ = fs::remove_file(PID_FILE);
}

fn is_process_running(pid: i32) -> bool {
    // Signal 0 only checks that the process exists.
    kill(Pid::from_raw(pid), None).is_ok()
}
