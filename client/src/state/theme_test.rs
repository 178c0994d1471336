use super::*;
use crate::util::host::MemoryHost;

// =============================================================
// resolve_initial
// =============================================================

#[test]
fn persisted_value_wins_over_system_preference() {
    for theme in [Theme::Light, Theme::Dark] {
        for prefers_dark in [false, true] {
            let host = MemoryHost::new()
                .with_dark_preference(prefers_dark)
                .with_stored(STORAGE_KEY, theme.as_str());
            assert_eq!(resolve_initial(&host), theme);
        }
    }
}

#[test]
fn unset_preference_falls_back_to_system() {
    let dark = MemoryHost::new().with_dark_preference(true);
    let light = MemoryHost::new().with_dark_preference(false);
    assert_eq!(resolve_initial(&dark), Theme::Dark);
    assert_eq!(resolve_initial(&light), Theme::Light);
}

#[test]
fn unrecognized_stored_value_reads_as_light() {
    let host = MemoryHost::new()
        .with_dark_preference(true)
        .with_stored(STORAGE_KEY, "solarized");
    assert_eq!(resolve_initial(&host), Theme::Light);
}

// =============================================================
// commit
// =============================================================

#[test]
fn commit_sets_marker_and_persists() {
    let host = MemoryHost::new();
    commit(&host, Theme::Dark);
    assert!(host.has_dark_marker());
    assert_eq!(host.stored(STORAGE_KEY).as_deref(), Some("dark"));

    commit(&host, Theme::Light);
    assert!(!host.has_dark_marker());
    assert_eq!(host.stored(STORAGE_KEY).as_deref(), Some("light"));
}

#[test]
fn commit_is_idempotent() {
    let host = MemoryHost::new();
    commit(&host, Theme::Dark);
    commit(&host, Theme::Dark);
    assert!(host.has_dark_marker());
    assert_eq!(host.stored(STORAGE_KEY).as_deref(), Some("dark"));
}

#[test]
fn commit_applies_marker_even_when_write_fails() {
    let host = MemoryHost::new().with_failing_writes();
    commit(&host, Theme::Dark);
    assert!(host.has_dark_marker());
    assert_eq!(host.stored(STORAGE_KEY), None);
    assert_eq!(host.write_attempts(), 1);
}

// =============================================================
// ThemeController
// =============================================================

#[test]
fn mount_runs_observer_once() {
    let controller = ThemeController::mount(MemoryHost::new().with_dark_preference(true));
    assert_eq!(controller.theme(), Theme::Dark);
    assert!(controller.host().has_dark_marker());
    assert_eq!(controller.host().stored(STORAGE_KEY).as_deref(), Some("dark"));
    assert_eq!(controller.host().write_attempts(), 1);
}

#[test]
fn mount_restores_each_persisted_theme() {
    for theme in [Theme::Light, Theme::Dark] {
        let host = MemoryHost::new().with_stored(STORAGE_KEY, theme.as_str());
        let controller = ThemeController::mount(host);
        assert_eq!(controller.theme(), theme);
        assert_eq!(controller.host().has_dark_marker(), theme.is_dark());
    }
}

#[test]
fn click_parity_decides_final_theme() {
    for start in [Theme::Light, Theme::Dark] {
        for clicks in 0..7 {
            let host = MemoryHost::new().with_stored(STORAGE_KEY, start.as_str());
            let mut controller = ThemeController::mount(host);
            for _ in 0..clicks {
                controller.toggle();
            }
            let expected = if clicks % 2 == 0 { start } else { start.toggled() };
            assert_eq!(controller.theme(), expected, "start={start} clicks={clicks}");
            assert_eq!(controller.host().has_dark_marker(), expected.is_dark());
            assert_eq!(controller.icon(), Icon::for_theme(expected));
        }
    }
}

#[test]
fn marker_tracks_state_after_every_change() {
    let mut controller = ThemeController::mount(MemoryHost::new());
    for _ in 0..4 {
        let theme = controller.toggle();
        assert_eq!(controller.host().has_dark_marker(), theme == Theme::Dark);
        assert_eq!(controller.host().stored(STORAGE_KEY).as_deref(), Some(theme.as_str()));
    }
}

#[test]
fn write_failure_does_not_change_state() {
    let host = MemoryHost::new().with_stored(STORAGE_KEY, "light").with_failing_writes();
    let mut controller = ThemeController::mount(host);
    assert_eq!(controller.toggle(), Theme::Dark);
    assert_eq!(controller.theme(), Theme::Dark);
    assert_eq!(controller.icon(), Icon::Sun);
    assert!(controller.host().has_dark_marker());
    assert_eq!(controller.host().stored(STORAGE_KEY).as_deref(), Some("light"));
}

#[test]
fn system_preference_is_captured_once_at_mount() {
    let mut controller = ThemeController::mount(MemoryHost::new());
    controller.host().set_prefers_dark(true);
    assert_eq!(controller.theme(), Theme::Light);
    assert_eq!(controller.toggle(), Theme::Dark);
    assert_eq!(controller.toggle(), Theme::Light);
}

#[test]
fn light_system_scenario_round_trip() {
    let mut controller = ThemeController::mount(MemoryHost::new().with_dark_preference(false));
    assert_eq!(controller.icon(), Icon::Moon);
    assert!(!controller.host().has_dark_marker());

    controller.toggle();
    assert_eq!(controller.icon(), Icon::Sun);
    assert!(controller.host().has_dark_marker());
    assert_eq!(controller.host().stored(STORAGE_KEY).as_deref(), Some("dark"));

    controller.toggle();
    assert_eq!(controller.icon(), Icon::Moon);
    assert!(!controller.host().has_dark_marker());
    assert_eq!(controller.host().stored(STORAGE_KEY).as_deref(), Some("light"));
}

#[test]
fn mount_leaves_unrecognized_value_until_first_toggle() {
    let host = MemoryHost::new().with_stored(STORAGE_KEY, "sepia");
    let mut controller = ThemeController::mount(&host);
    assert_eq!(controller.theme(), Theme::Light);
    assert_eq!(host.stored(STORAGE_KEY).as_deref(), Some("sepia"));

    controller.toggle();
    assert_eq!(host.stored(STORAGE_KEY).as_deref(), Some("dark"));
}

#[test]
fn controller_can_borrow_its_host() {
    let host = MemoryHost::new();
    {
        let mut controller = ThemeController::mount(&host);
        controller.toggle();
    }
    assert_eq!(host.stored(STORAGE_KEY).as_deref(), Some("dark"));
}
