use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{FIXTURE_JSON, MONDAY_MORNING, MONDAY_SIESTA, SATURDAY_NOON, gl, setup_test_data};

#[test]
fn test_list_shows_open_and_closed_state() {
    let data = setup_test_data("list_state");

    gl().args(["--data", &data, "--now", MONDAY_MORNING, "list"])
        .assert()
        .success()
        .stdout(contains("Café La Plaza"))
        .stdout(contains("Discos Vinilo"))
        .stdout(contains("Abierto"))
        .stdout(contains("Cerrado"))
        .stdout(contains("3 abiertos ahora"));
}

#[test]
fn test_list_open_only_excludes_closed_businesses() {
    let data = setup_test_data("list_open_only");

    gl().args(["--data", &data, "--now", MONDAY_MORNING, "list", "--open"])
        .assert()
        .success()
        .stdout(contains("Café La Plaza"))
        .stdout(contains("Discos Vinilo").not());
}

#[test]
fn test_list_during_siesta_gap_everything_closed() {
    let data = setup_test_data("list_siesta");

    gl().args(["--data", &data, "--now", MONDAY_SIESTA, "list", "--open"])
        .assert()
        .success()
        .stdout(contains("No hay negocios"));
}

#[test]
fn test_list_filter_by_category() {
    let data = setup_test_data("list_category");

    gl().args(["--data", &data, "--now", MONDAY_MORNING, "list", "--category", "farmacia"])
        .assert()
        .success()
        .stdout(contains("Farmacia Norte"))
        .stdout(contains("Farmacia Sur"))
        .stdout(contains("Café La Plaza").not());
}

#[test]
fn test_list_unknown_category_fails() {
    let data = setup_test_data("list_bad_category");

    gl().args(["--data", &data, "list", "--category", "zapateria"])
        .assert()
        .failure()
        .stderr(contains("Unknown category: zapateria"));
}

#[test]
fn test_list_featured_only() {
    let data = setup_test_data("list_featured");

    gl().args(["--data", &data, "--now", MONDAY_MORNING, "list", "--featured"])
        .assert()
        .success()
        .stdout(contains("Café La Plaza"))
        .stdout(contains("Farmacia Norte").not());
}

#[test]
fn test_search_matches_description() {
    let data = setup_test_data("search_description");

    gl().args(["--data", &data, "search", "vinilos"])
        .assert()
        .success()
        .stdout(contains("Discos Vinilo"));
}

#[test]
fn test_search_matches_category_name() {
    let data = setup_test_data("search_category");

    gl().args(["--data", &data, "search", "cafetería"])
        .assert()
        .success()
        .stdout(contains("Café La Plaza"));
}

#[test]
fn test_search_without_results() {
    let data = setup_test_data("search_empty");

    gl().args(["--data", &data, "search", "astilleros"])
        .assert()
        .success()
        .stdout(contains("Sin resultados"));
}

#[test]
fn test_categories_lists_all_with_counts() {
    let data = setup_test_data("categories");

    gl().args(["--data", &data, "categories"])
        .assert()
        .success()
        .stdout(contains("Cafetería"))
        .stdout(contains("Farmacia"))
        .stdout(contains("Tienda de Música"));
}

#[test]
fn test_show_renders_detail_and_hours() {
    let data = setup_test_data("show_detail");

    gl().args(["--data", &data, "--now", MONDAY_MORNING, "show", "cafe-la-plaza"])
        .assert()
        .success()
        .stdout(contains("Plaza Mayor 1"))
        .stdout(contains("Horario"))
        .stdout(contains("Lunes"))
        .stdout(contains("08:00 AM - 12:00 PM"));
}

#[test]
fn test_show_finds_by_partial_name() {
    let data = setup_test_data("show_partial");

    gl().args(["--data", &data, "show", "vinilo"])
        .assert()
        .success()
        .stdout(contains("Callejón del Agua 5"));
}

#[test]
fn test_show_unknown_business_fails() {
    let data = setup_test_data("show_unknown");

    gl().args(["--data", &data, "show", "no-existe"])
        .assert()
        .failure()
        .stderr(contains("No business found"));
}

#[test]
fn test_pharmacy_on_duty_today() {
    let data = setup_test_data("pharmacy_today");

    // Lunes belongs to Farmacia Norte's rotation
    gl().args(["--data", &data, "--now", MONDAY_MORNING, "pharmacy"])
        .assert()
        .success()
        .stdout(contains("De turno hoy"))
        .stdout(contains("Farmacia Norte"))
        .stdout(contains("+34 600 550 202"));
}

#[test]
fn test_pharmacy_shared_day_first_match_wins() {
    let data = setup_test_data("pharmacy_tiebreak");

    // both pharmacies list Sábado; dataset order puts Norte first
    gl().args(["--data", &data, "--now", SATURDAY_NOON, "pharmacy"])
        .assert()
        .success()
        .stdout(contains("Farmacia Norte"))
        .stdout(contains("Farmacia Sur").not());
}

#[test]
fn test_pharmacy_without_duty_today() {
    let data = setup_test_data("pharmacy_none");

    // Domingo is uncovered in the fixture rotation
    gl().args(["--data", &data, "--now", "2026-08-02 10:00", "pharmacy"])
        .assert()
        .success()
        .stdout(contains("no hay turno"));
}

#[test]
fn test_pharmacy_week_calendar() {
    let data = setup_test_data("pharmacy_week");

    gl().args(["--data", &data, "--now", MONDAY_MORNING, "pharmacy", "--week"])
        .assert()
        .success()
        .stdout(contains("Calendario de Farmacias de Turno"))
        .stdout(contains("Domingo"))
        .stdout(contains("Lunes"))
        .stdout(contains("Martes"))
        .stdout(contains("Miércoles"))
        .stdout(contains("Jueves"))
        .stdout(contains("Viernes"))
        .stdout(contains("Sábado"))
        .stdout(contains("No hay turno"));
}

#[test]
fn test_watch_single_tick() {
    let data = setup_test_data("watch_tick");

    gl().args(["--data", &data, "--now", MONDAY_MORNING, "watch", "--ticks", "1"])
        .assert()
        .success()
        .stdout(contains("abiertos: 3/4"))
        .stdout(contains("farmacia de turno: Farmacia Norte"));
}

#[test]
fn test_invalid_now_timestamp_fails() {
    let data = setup_test_data("bad_now");

    gl().args(["--data", &data, "--now", "ayer por la tarde", "list"])
        .assert()
        .failure()
        .stderr(contains("Invalid timestamp"));
}

#[test]
fn test_missing_dataset_file_fails() {
    gl().args(["--data", "/tmp/definitely_missing_guialocal.json", "list"])
        .assert()
        .failure()
        .stderr(contains("Dataset file not found"));
}

#[test]
fn test_init_seeds_custom_dataset() {
    let home = std::env::temp_dir().join("guialocal_init_home");
    std::fs::create_dir_all(&home).expect("create temp home");
    let dataset = home.join("mi-directorio.json");
    std::fs::remove_file(&dataset).ok();

    gl().env("HOME", &home)
        .args(["--data", dataset.to_str().unwrap(), "init"])
        .assert()
        .success()
        .stdout(contains("initialization completed"));

    assert!(dataset.exists(), "init should seed the custom dataset file");

    // the seeded dataset is immediately usable
    gl().env("HOME", &home)
        .args(["--data", dataset.to_str().unwrap(), "categories"])
        .assert()
        .success()
        .stdout(contains("Farmacia"));
}

#[test]
fn test_config_print_shows_defaults() {
    let home = std::env::temp_dir().join("guialocal_config_home");
    std::fs::create_dir_all(&home).expect("create temp home");

    gl().env("HOME", &home)
        .args(["config", "--print"])
        .assert()
        .success()
        .stdout(contains("refresh_interval_secs"));
}

#[test]
fn test_dataset_fixture_is_valid_json() {
    // keep the fixture honest: it must parse with the same loader the CLI uses
    let dir = guialocal::data::Directory::from_json(FIXTURE_JSON).expect("fixture parses");
    assert_eq!(dir.businesses.len(), 4);
    assert_eq!(dir.categories.len(), 3);
    assert_eq!(dir.pharmacies().len(), 2);
}
