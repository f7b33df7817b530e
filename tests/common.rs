#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn gl() -> Command {
    cargo_bin_cmd!("guialocal")
}

/// Write a deterministic fixture dataset into the system temp dir and return
/// its path. Any stale file from a previous run is replaced.
pub fn setup_test_data(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_guialocal.json", name));
    let data_path = path.to_string_lossy().to_string();

    fs::write(&path, FIXTURE_JSON).expect("write fixture dataset");

    data_path
}

/// Monday in the fixture's terms; the café is open (10:00 falls in its
/// morning window), the record shop is closed on Mondays.
pub const MONDAY_MORNING: &str = "2026-08-03 10:00";
pub const MONDAY_SIESTA: &str = "2026-08-03 14:30";
pub const SATURDAY_NOON: &str = "2026-08-08 12:00";

/// Small dataset used by the CLI tests: two pharmacies sharing a duty day
/// (first-match tie-break), one day with no duty at all (Domingo), one
/// morning-closed day, and a midnight-closing schedule.
pub const FIXTURE_JSON: &str = r##"{
  "categories": [
    { "id": "cafeteria", "name": "Cafetería", "icon": "☕", "color": "#92400e" },
    { "id": "farmacia", "name": "Farmacia", "icon": "💊", "color": "#ef4444" },
    { "id": "musica", "name": "Tienda de Música", "icon": "🎵", "color": "#6366f1" }
  ],
  "businesses": [
    {
      "id": "cafe-la-plaza",
      "name": "Café La Plaza",
      "category": "cafeteria",
      "description": "Desayunos y meriendas con terraza en la plaza.",
      "address": "Plaza Mayor 1",
      "phone": "+34 921 550 101",
      "hours": {
        "sunday": { "morning": "Cerrado", "afternoon": "Cerrado" },
        "monday": { "morning": "08:00 AM - 12:00 PM", "afternoon": "04:00 PM - 08:00 PM" },
        "tuesday": { "morning": "08:00 AM - 12:00 PM", "afternoon": "04:00 PM - 08:00 PM" },
        "wednesday": { "morning": "08:00 AM - 12:00 PM", "afternoon": "04:00 PM - 08:00 PM" },
        "thursday": { "morning": "08:00 AM - 12:00 PM", "afternoon": "04:00 PM - 08:00 PM" },
        "friday": { "morning": "08:00 AM - 12:00 PM", "afternoon": "04:00 PM - 08:00 PM" },
        "saturday": { "morning": "09:00 AM - 02:00 PM", "afternoon": "Cerrado" }
      },
      "coordinates": { "lat": 40.9480, "lng": -4.1180 },
      "featured": true
    },
    {
      "id": "farmacia-norte",
      "name": "Farmacia Norte",
      "category": "farmacia",
      "description": "Farmacia con servicio de guardia en el barrio norte.",
      "address": "Calle Norte 10",
      "phone": "+34 921 550 202",
      "hours": {
        "sunday": { "morning": "Cerrado", "afternoon": "Cerrado" },
        "monday": { "morning": "09:00 AM - 01:00 PM", "afternoon": "05:00 PM - 08:00 PM" },
        "tuesday": { "morning": "09:00 AM - 01:00 PM", "afternoon": "05:00 PM - 08:00 PM" },
        "wednesday": { "morning": "09:00 AM - 01:00 PM", "afternoon": "05:00 PM - 08:00 PM" },
        "thursday": { "morning": "09:00 AM - 01:00 PM", "afternoon": "05:00 PM - 08:00 PM" },
        "friday": { "morning": "09:00 AM - 01:00 PM", "afternoon": "05:00 PM - 08:00 PM" },
        "saturday": { "morning": "10:00 AM - 02:00 PM", "afternoon": "Cerrado" }
      },
      "coordinates": { "lat": 40.9520, "lng": -4.1200 },
      "isPharmacy": true,
      "pharmacyTurns": ["Lunes", "Miércoles", "Viernes", "Sábado"],
      "emergencyPhone": "+34 600 550 202"
    },
    {
      "id": "farmacia-sur",
      "name": "Farmacia Sur",
      "category": "farmacia",
      "description": "Farmacia junto a la carretera del sur.",
      "address": "Avenida del Sur 22",
      "phone": "+34 921 550 303",
      "hours": {
        "sunday": { "morning": "Cerrado", "afternoon": "Cerrado" },
        "monday": { "morning": "09:00 AM - 01:00 PM", "afternoon": "05:00 PM - 08:00 PM" },
        "tuesday": { "morning": "09:00 AM - 01:00 PM", "afternoon": "05:00 PM - 08:00 PM" },
        "wednesday": { "morning": "09:00 AM - 01:00 PM", "afternoon": "05:00 PM - 08:00 PM" },
        "thursday": { "morning": "09:00 AM - 01:00 PM", "afternoon": "05:00 PM - 08:00 PM" },
        "friday": { "morning": "09:00 AM - 01:00 PM", "afternoon": "05:00 PM - 08:00 PM" },
        "saturday": { "morning": "10:00 AM - 02:00 PM", "afternoon": "Cerrado" }
      },
      "coordinates": { "lat": 40.9440, "lng": -4.1160 },
      "isPharmacy": true,
      "pharmacyTurns": ["Sábado", "Martes", "Jueves"],
      "emergencyPhone": "+34 600 550 303"
    },
    {
      "id": "discos-vinilo",
      "name": "Discos Vinilo",
      "category": "musica",
      "description": "Vinilos nuevos y de segunda mano, abierto hasta medianoche.",
      "address": "Callejón del Agua 5",
      "hours": {
        "sunday": { "morning": "Cerrado", "afternoon": "Cerrado" },
        "monday": { "morning": "Cerrado", "afternoon": "04:00 PM - 09:00 PM" },
        "tuesday": { "morning": "04:00 PM - 12:00 AM", "afternoon": "Cerrado" },
        "wednesday": { "morning": "04:00 PM - 12:00 AM", "afternoon": "Cerrado" },
        "thursday": { "morning": "04:00 PM - 12:00 AM", "afternoon": "Cerrado" },
        "friday": { "morning": "04:00 PM - 12:00 AM", "afternoon": "Cerrado" },
        "saturday": { "morning": "04:00 PM - 12:00 AM", "afternoon": "Cerrado" }
      },
      "coordinates": { "lat": 40.9465, "lng": -4.1175 }
    }
  ]
}"##;
