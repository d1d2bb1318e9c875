//! Shared fixtures for the integration tests

#![allow(dead_code)]

use serde_json::{json, Value};

use forest_fire_dashboard_backend::external::InMemoryReader;

pub fn registry_rows() -> Vec<Value> {
    vec![
        json!({"isletme_id": 1, "isletme_ad": "Gemlik Orman İşletmesi"}),
        json!({"isletme_id": 2, "isletme_ad": "Keles Orman İşletmesi"}),
        json!({"isletme_id": 3, "isletme_ad": "Söğüt Orman İşletmesi"}),
        json!({"isletme_id": 4, "isletme_ad": null}),
    ]
}

pub fn vehicle_rows() -> Vec<Value> {
    vec![
        json!({
            "isletme_ad": "Gemlik Orman İşletmesi",
            "isletme_toplam_arac": 10,
            "yanginda_kullanilan_arac": 7,
            "arac_asimi": 3
        }),
        json!({
            "isletme_ad": "Keles Orman İşletmesi",
            "isletme_toplam_arac": "6",
            "yanginda_kullanilan_arac": null,
            "arac_asimi": 0
        }),
    ]
}

pub fn danger_rows() -> Vec<Value> {
    vec![
        json!({"isletme_ad": "Gemlik Orman İşletmesi", "tehlike_turu": "Orta"}),
        json!({"isletme_ad": "Keles Orman İşletmesi", "tehlike_turu": "Çok Yüksek"}),
        json!({"isletme_ad": "Söğüt Orman İşletmesi", "tehlike_turu": "Yuksek"}),
    ]
}

pub fn fleet_rows() -> Vec<Value> {
    vec![
        json!({"isletme_id": 1, "adet": 4, "Arac": {"arac_tur_adi": "Arazöz"}}),
        json!({"isletme_id": 1, "adet": "2", "Arac": {"arac_tur_adi": "Su İkmal"}}),
        json!({"isletme_id": 2, "adet": 1, "Arac": null}),
    ]
}

pub fn fires_2023() -> Vec<Value> {
    vec![
        json!({"yangin_ay": "Temmuz", "isletme_id": 1}),
        json!({"yangin_ay": "temmuz", "isletme_id": 2}),
        json!({"yangin_ay": "August", "isletme_id": 1}),
        json!({"yangin_ay": "Ağustos", "isletme_id": 2}),
        json!({"yangin_ay": "Mayis", "isletme_id": 1}),
        json!({"yangin_ay": null, "isletme_id": 1}),
    ]
}

pub fn fires_2024() -> Vec<Value> {
    vec![
        json!({"yangin_ay": "Haziran", "isletme_id": 2}),
        json!({"yangin_ay": "Eylül", "isletme_id": "1"}),
    ]
}

pub fn fires_2025() -> Vec<Value> {
    vec![json!({"yangin_ay": "Ocak", "isletme_id": 3})]
}

pub fn tree_type_rows() -> Vec<Value> {
    vec![
        json!({"isletme_ad": "Gemlik Orman İşletmesi", "agac_tur": "Kızılçam", "yangin_sayisi": 5}),
        json!({"isletme_ad": "Gemlik Orman İşletmesi", "agac_tur": null, "yangin_sayisi": 1}),
        json!({"isletme_ad": "Keles Orman İşletmesi", "agac_tur": "Karaçam", "yangin_sayisi": "3"}),
    ]
}

pub fn fire_cause_rows() -> Vec<Value> {
    vec![
        json!({"isletme_ad": "Keles Orman İşletmesi", "yangin_neden": "Yıldırım", "yangin_sayisi": 2}),
        json!({"isletme_ad": "Keles Orman İşletmesi", "yangin_neden": null, "yangin_sayisi": null}),
        json!({"isletme_ad": "Gemlik Orman İşletmesi", "yangin_neden": "Anız yakma", "yangin_sayisi": 4}),
    ]
}

/// Reader holding every table and view the dashboard reads
pub fn fixture_reader() -> InMemoryReader {
    InMemoryReader::new()
        .with_table("Isletme", registry_rows())
        .with_table("isletme_arac_asimi_view", vehicle_rows())
        .with_table("isletme_tehlike_siralama_view", danger_rows())
        .with_table("Isletme_arac", fleet_rows())
        .with_table("Yangin_2023", fires_2023())
        .with_table("Yangin_2024", fires_2024())
        .with_table("Yangin_2025", fires_2025())
        .with_table("tehlikeli_yangin_agac_view", tree_type_rows())
        .with_table("isletme_yangin_nedenleri_view", fire_cause_rows())
}
