use crate::app::event::AppEvent;
use crate::app::state::AppState;

pub fn handle_event(state: &mut AppState, event: AppEvent) {
    match event {
        AppEvent::Command(line) => {
            handle_command(state, &line);
            state.dirty = true;
        }
        AppEvent::Tick => {
            state.dirty = true;
        }
        AppEvent::RegionsChanged => {
            state.dirty = true;
        }
        AppEvent::Quit => {
            state.should_quit = true;
        }
    }
}

fn handle_command(state: &mut AppState, line: &str) {
    let mut parts = line.split_whitespace();
    let command = match parts.next() {
        Some(command) => command,
        None => return,
    };
    let arg = parts.next();

    state.status_message = None;
    match (command, arg) {
        ("busy", Some(region)) => state.loading.activate(region),
        ("done", Some(region)) => state.loading.deactivate(region),
        ("status", Some(region)) => {
            let flag = if state.loading.is_loading(region) {
                "loading"
            } else {
                "idle"
            };
            state.status_message = Some(format!("{}: {}", region, flag));
        }
        ("busy" | "done" | "status", None) => {
            state.status_message = Some(format!("{} needs a region name", command));
        }
        ("help" | "?", _) => {
            state.status_message =
                Some("commands: busy <region>, done <region>, status <region>, quit".to_string());
        }
        ("quit" | "q", _) => state.should_quit = true,
        _ => {
            state.status_message =
                Some(format!("unknown command: {} (try: help)", command));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;

    fn test_state() -> AppState {
        AppState::new(AppConfig::default(), None)
    }

    #[test]
    fn busy_and_done_flip_region_flags() {
        let mut state = test_state();
        handle_event(&mut state, AppEvent::Command("busy sidebar".to_string()));
        assert!(state.loading.is_loading("sidebar"));
        handle_event(&mut state, AppEvent::Command("done sidebar".to_string()));
        assert!(!state.loading.is_loading("sidebar"));
    }

    #[test]
    fn status_reports_current_flag() {
        let mut state = test_state();
        handle_event(&mut state, AppEvent::Command("status timer".to_string()));
        assert_eq!(state.status_message.as_deref(), Some("timer: loading"));
        handle_event(&mut state, AppEvent::Command("done timer".to_string()));
        handle_event(&mut state, AppEvent::Command("status timer".to_string()));
        assert_eq!(state.status_message.as_deref(), Some("timer: idle"));
    }

    #[test]
    fn unknown_command_sets_status_message() {
        let mut state = test_state();
        handle_event(&mut state, AppEvent::Command("frobnicate".to_string()));
        assert!(state
            .status_message
            .as_deref()
            .is_some_and(|msg| msg.contains("unknown command")));
    }

    #[test]
    fn quit_command_and_ctrl_c_request_shutdown() {
        let mut state = test_state();
        handle_event(&mut state, AppEvent::Command("quit".to_string()));
        assert!(state.should_quit);

        let mut state = test_state();
        handle_event(&mut state, AppEvent::Quit);
        assert!(state.should_quit);
    }

    #[test]
    fn tick_marks_state_dirty() {
        let mut state = test_state();
        state.dirty = false;
        handle_event(&mut state, AppEvent::Tick);
        assert!(state.dirty);
    }

    #[test]
    fn blank_line_is_ignored() {
        let mut state = test_state();
        state.dirty = false;
        handle_event(&mut state, AppEvent::Command("   ".to_string()));
        assert!(state.status_message.is_none());
        assert!(!state.should_quit);
    }
}
