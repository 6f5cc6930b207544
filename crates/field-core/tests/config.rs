// File: crates/field-core/tests/config.rs
// Purpose: TOML configuration defaults, overrides and validation.

use field_core::{FieldConfig, PlotRequest};

#[test]
fn empty_config_uses_form_defaults() {
    let cfg = FieldConfig::from_toml("").expect("empty config");
    assert_eq!(cfg.grid.min, -10.0);
    assert_eq!(cfg.grid.max, 10.0);
    assert_eq!(cfg.grid.points, 200);
    assert!(cfg.equipotentials.show);
    assert_eq!(cfg.equipotentials.levels, 20);
    assert_eq!(cfg.zoom.zoom_out_factor, 1.2);
    assert_eq!(cfg.zoom.zoom_in_factor, 0.8);
    assert_eq!(cfg.zoom.min_extent, 1e-2);
    assert_eq!(cfg.render.theme, "light");
}

#[test]
fn partial_sections_override_only_given_keys() {
    let cfg = FieldConfig::from_toml(
        r#"
        [grid]
        points = 64

        [equipotentials]
        show = false

        [render]
        theme = "dark"
        width = 640

        [render.streamlines]
        density = 0.8
        "#,
    )
    .expect("config");
    assert_eq!(cfg.grid.points, 64);
    assert_eq!(cfg.grid.min, -10.0);
    assert!(!cfg.equipotentials.show);
    assert_eq!(cfg.equipotentials.levels, 20);

    let opts = cfg.render.to_options();
    assert_eq!(opts.width, 640);
    assert_eq!(opts.height, 900);
    assert_eq!(opts.theme.name, "dark");
    assert_eq!(opts.streamlines.density, 0.8);
    assert_eq!(opts.streamlines.max_steps, 2000);
}

#[test]
fn unknown_theme_falls_back_to_light() {
    let cfg = FieldConfig::from_toml("[render]\ntheme = \"sepia\"").expect("config");
    assert_eq!(cfg.render.to_options().theme.name, "light");
}

#[test]
fn invalid_values_are_rejected() {
    for bad in [
        "[grid]\nmin = 3.0\nmax = 1.0",
        "[grid]\npoints = 0",
        "[equipotentials]\nlevels = 0",
        "[equipotentials]\nlevels = 101",
        "[zoom]\nzoom_out_factor = 0.9",
        "[zoom]\nzoom_in_factor = 1.5",
        "[zoom]\nmin_extent = 0.0",
        "[render]\nwidth = 0",
        "[render.streamlines]\ndensity = -1.0",
    ] {
        assert!(FieldConfig::from_toml(bad).is_err(), "accepted: {bad}");
    }
    assert!(FieldConfig::from_toml("[grid\n").is_err());
}

#[test]
fn plot_inputs_round_trip_through_request_parsing() {
    let cfg = FieldConfig::from_toml("[grid]\nmin = -2.5\nmax = 4.0\npoints = 33\n[equipotentials]\nlevels = 7")
        .expect("config");
    let req = PlotRequest::parse(&cfg.plot_inputs("0 0 1")).expect("request");
    assert_eq!(req.grid.min(), -2.5);
    assert_eq!(req.grid.max(), 4.0);
    assert_eq!(req.grid.points(), 33);
    assert_eq!(req.equipotentials.level_count, 7);
}

#[test]
fn missing_file_reports_path() {
    let err = FieldConfig::from_file("does/not/exist.toml").unwrap_err();
    assert!(format!("{err:#}").contains("does/not/exist.toml"));
}
