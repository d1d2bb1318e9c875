//! Dashboard data service
//!
//! Each query reads one or more backend tables/views through the
//! [`TableReader`] boundary and reshapes the rows into chart records. Missing
//! data resolves to defaults; backend faults propagate unchanged.

use std::cmp::Reverse;
use std::sync::Arc;

use futures::future::try_join_all;
use serde::Serialize;

use super::index::{FirstMatchIndex, GroupIndex};
use crate::error::{AppError, AppResult};
use crate::external::{fetch_rows, ReadRequest, TableReader};
use crate::models::*;
use shared::{resolve_danger_level, resolve_district_id, short_business_name, tally_months};

/// Label for tree types and causes missing from a view row
pub const UNKNOWN_LABEL: &str = "Bilinmiyor";
/// Vehicle type name when the embedded vehicle row is missing
pub const DEFAULT_VEHICLE_TYPE: &str = "Araç";
/// Business name when a view row carries none
pub const DEFAULT_BUSINESS_NAME: &str = "İşletme";
/// District id when neither the name nor the registry id yields one
pub const UNKNOWN_DISTRICT_ID: &str = "bilinmiyor";

/// Dashboard service
#[derive(Clone)]
pub struct DashboardService {
    reader: Arc<dyn TableReader>,
}

impl DashboardService {
    pub fn new(reader: Arc<dyn TableReader>) -> Self {
        Self { reader }
    }

    /// Cheap read used by the health check
    pub async fn check_backend(&self) -> AppResult<()> {
        self.reader
            .read(ReadRequest::new(BUSINESS_REGISTRY, "isletme_id").with_limit(1))
            .await
            .map(|_| ())
    }

    /// Businesses joined with their vehicle totals, danger level and fleet.
    ///
    /// The four sources are read concurrently and joined by key once all of
    /// them have returned.
    pub async fn list_businesses(&self) -> AppResult<Vec<Business>> {
        let reader = self.reader.as_ref();

        let (registry, vehicles, dangers, fleet) = tokio::try_join!(
            fetch_rows::<BusinessRow>(
                reader,
                ReadRequest::new(BUSINESS_REGISTRY, "isletme_id, isletme_ad"),
            ),
            fetch_rows::<VehicleExcessRow>(reader, ReadRequest::all(VEHICLE_EXCESS_VIEW)),
            fetch_rows::<DangerRow>(reader, ReadRequest::all(DANGER_RANKING_VIEW)),
            fetch_rows::<BusinessVehicleRow>(
                reader,
                ReadRequest::new(BUSINESS_VEHICLES, "isletme_id, adet, Arac(arac_tur_adi)"),
            ),
        )?;

        Ok(join_businesses(&registry, &vehicles, &dangers, &fleet))
    }

    /// Vehicle inventory per business
    pub async fn vehicle_data(&self) -> AppResult<Vec<VehicleData>> {
        let rows: Vec<VehicleExcessRow> =
            fetch_rows(self.reader.as_ref(), ReadRequest::all(VEHICLE_EXCESS_VIEW)).await?;

        Ok(rows
            .into_iter()
            .map(|row| VehicleData {
                business_name: short_business_name(
                    row.isletme_ad.as_deref().unwrap_or(DEFAULT_BUSINESS_NAME),
                ),
                total_vehicles: row.isletme_toplam_arac,
                used_vehicles: row.yanginda_kullanilan_arac,
                excess: row.arac_asimi,
            })
            .collect())
    }

    /// Businesses ranked by danger score, highest first
    pub async fn danger_ranking(&self) -> AppResult<Vec<DangerRankingData>> {
        let rows: Vec<DangerRow> =
            fetch_rows(self.reader.as_ref(), ReadRequest::all(DANGER_RANKING_VIEW)).await?;

        Ok(rank_by_danger(&rows))
    }

    /// Fires per calendar month of `year`, optionally for one business.
    ///
    /// A year without a partition yields twelve zero entries and no read.
    pub async fn monthly_fire_data(
        &self,
        business_id: Option<&str>,
        year: i32,
    ) -> AppResult<Vec<MonthlyFireData>> {
        let Some(partition) = fire_partition(year) else {
            tracing::debug!(year, "no fire partition for year");
            return Ok(MonthlyFireData::zero_filled());
        };

        let rows: Vec<FireIncidentRow> = fetch_rows(
            self.reader.as_ref(),
            ReadRequest::new(partition, "yangin_ay, isletme_id"),
        )
        .await?;

        let counts = tally_months(
            rows.iter()
                .filter(|row| matches_business_id(row, business_id))
                .map(|row| row.yangin_ay.as_deref()),
        );
        Ok(MonthlyFireData::from_counts(counts))
    }

    /// Fires per year across every partition, ascending by year.
    ///
    /// One read per partition, all issued concurrently.
    pub async fn yearly_fire_data(&self, business_id: Option<&str>) -> AppResult<Vec<YearlyFireData>> {
        let reader = self.reader.as_ref();

        let reads = FIRE_YEARS.iter().filter_map(|&year| {
            let partition = fire_partition(year)?;
            Some(async move {
                let rows: Vec<FireIncidentRow> =
                    fetch_rows(reader, ReadRequest::new(partition, "isletme_id")).await?;
                let count = rows
                    .iter()
                    .filter(|row| matches_business_id(row, business_id))
                    .count() as u64;
                Ok::<_, AppError>(YearlyFireData { year, count })
            })
        });

        let mut results = try_join_all(reads).await?;
        results.sort_by_key(|entry| entry.year);
        Ok(results)
    }

    /// Fires per tree species, optionally for one business name
    pub async fn tree_type_data(&self, business_name: Option<&str>) -> AppResult<Vec<TreeTypeData>> {
        let rows: Vec<TreeTypeRow> =
            fetch_rows(self.reader.as_ref(), ReadRequest::all(TREE_TYPE_VIEW)).await?;

        Ok(rows
            .into_iter()
            .filter(|row| matches_business_name(row.isletme_ad.as_deref(), business_name))
            .map(|row| TreeTypeData {
                tree_type: row.agac_tur.unwrap_or_else(|| UNKNOWN_LABEL.to_string()),
                count: row.yangin_sayisi,
            })
            .collect())
    }

    /// Fires per cause, optionally for one business name
    pub async fn fire_cause_data(&self, business_name: Option<&str>) -> AppResult<Vec<FireCauseData>> {
        let rows: Vec<FireCauseRow> =
            fetch_rows(self.reader.as_ref(), ReadRequest::all(FIRE_CAUSE_VIEW)).await?;

        Ok(rows
            .into_iter()
            .filter(|row| matches_business_name(row.isletme_ad.as_deref(), business_name))
            .map(|row| FireCauseData {
                cause: row.yangin_neden.unwrap_or_else(|| UNKNOWN_LABEL.to_string()),
                count: row.yangin_sayisi,
            })
            .collect())
    }

    /// Map panel for the current selection
    pub async fn map_snapshot(&self, selected: Option<&str>) -> AppResult<shared::MapSnapshot> {
        let businesses = self.list_businesses().await?;
        Ok(shared::MapSnapshot::build(&districts(), &businesses, selected))
    }

    /// Export report data as CSV; the header row is written even when
    /// there are no records
    pub fn export_to_csv<T: CsvRecord>(data: &[T]) -> AppResult<String> {
        let mut wtr = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(vec![]);
        wtr.write_record(T::CSV_HEADERS)
            .map_err(|e| AppError::Internal(format!("CSV serialization error: {}", e)))?;
        for record in data {
            wtr.serialize(record)
                .map_err(|e| AppError::Internal(format!("CSV serialization error: {}", e)))?;
        }
        let csv_data = String::from_utf8(
            wtr.into_inner()
                .map_err(|e| AppError::Internal(format!("CSV writer error: {}", e)))?,
        )
        .map_err(|e| AppError::Internal(format!("UTF-8 conversion error: {}", e)))?;
        Ok(csv_data)
    }
}

/// Report record with a fixed CSV header, matching its serialized field names
pub trait CsvRecord: Serialize {
    const CSV_HEADERS: &'static [&'static str];
}

impl CsvRecord for VehicleData {
    const CSV_HEADERS: &'static [&'static str] =
        &["businessName", "totalVehicles", "usedVehicles", "excess"];
}

impl CsvRecord for DangerRankingData {
    const CSV_HEADERS: &'static [&'static str] = &["businessName", "dangerScore", "level"];
}

impl CsvRecord for MonthlyFireData {
    const CSV_HEADERS: &'static [&'static str] = &["month", "count"];
}

impl CsvRecord for YearlyFireData {
    const CSV_HEADERS: &'static [&'static str] = &["year", "count"];
}

impl CsvRecord for TreeTypeData {
    const CSV_HEADERS: &'static [&'static str] = &["treeType", "count"];
}

impl CsvRecord for FireCauseData {
    const CSV_HEADERS: &'static [&'static str] = &["cause", "count"];
}

/// An empty filter value means no filter
fn matches_business_id(row: &FireIncidentRow, business_id: Option<&str>) -> bool {
    match business_id.filter(|id| !id.is_empty()) {
        Some(id) => row.isletme_id.as_deref() == Some(id),
        None => true,
    }
}

fn matches_business_name(row_name: Option<&str>, business_name: Option<&str>) -> bool {
    match business_name.filter(|name| !name.is_empty()) {
        Some(name) => row_name == Some(name),
        None => true,
    }
}

/// Join the registry with the vehicle, danger and fleet row sets.
///
/// Vehicle and danger rows are matched by business name, fleet rows by
/// business id. When a view repeats a business name the first row wins.
pub fn join_businesses(
    registry: &[BusinessRow],
    vehicles: &[VehicleExcessRow],
    dangers: &[DangerRow],
    fleet: &[BusinessVehicleRow],
) -> Vec<Business> {
    let vehicles_by_name = FirstMatchIndex::build(vehicles, |row| row.isletme_ad.as_deref());
    let dangers_by_name = FirstMatchIndex::build(dangers, |row| row.isletme_ad.as_deref());
    let fleet_by_id = GroupIndex::build(fleet, |row| row.isletme_id.as_deref());

    if vehicles_by_name.duplicates() > 0 || dangers_by_name.duplicates() > 0 {
        tracing::warn!(
            vehicle_duplicates = vehicles_by_name.duplicates(),
            danger_duplicates = dangers_by_name.duplicates(),
            "duplicate business names in report views, using first row"
        );
    }

    registry
        .iter()
        .map(|row| {
            let id = row.isletme_id.clone().unwrap_or_default();
            let name = row
                .isletme_ad
                .clone()
                .unwrap_or_else(|| format!("{} {}", DEFAULT_BUSINESS_NAME, id));

            let vehicle_info = vehicles_by_name.get(&name);
            let danger_info = dangers_by_name.get(&name);

            let vehicle_types = fleet_by_id
                .get(&id)
                .iter()
                .map(|entry| VehicleTypeCount {
                    vehicle_type: entry
                        .arac
                        .as_ref()
                        .and_then(|kind| kind.arac_tur_adi.clone())
                        .unwrap_or_else(|| DEFAULT_VEHICLE_TYPE.to_string()),
                    count: entry.adet,
                })
                .collect();

            Business {
                district_id: resolve_district_id(Some(&name))
                    .or_else(|| Some(id.clone()).filter(|id| !id.is_empty()))
                    .unwrap_or_else(|| UNKNOWN_DISTRICT_ID.to_string()),
                total_vehicles: vehicle_info.map(|v| v.isletme_toplam_arac).unwrap_or(0),
                used_in_fire_vehicles: vehicle_info.map(|v| v.yanginda_kullanilan_arac).unwrap_or(0),
                danger_level: resolve_danger_level(
                    danger_info.and_then(|d| d.tehlike_turu.as_deref()),
                ),
                vehicle_types,
                id,
                name,
            }
        })
        .collect()
}

/// Map danger rows to scores and sort descending.
///
/// The sort is stable: rows with equal scores keep their backend order.
pub fn rank_by_danger(rows: &[DangerRow]) -> Vec<DangerRankingData> {
    let mut ranking: Vec<DangerRankingData> = rows
        .iter()
        .map(|row| {
            DangerRankingData::new(
                short_business_name(row.isletme_ad.as_deref().unwrap_or(DEFAULT_BUSINESS_NAME)),
                resolve_danger_level(row.tehlike_turu.as_deref()),
            )
        })
        .collect();

    ranking.sort_by_key(|entry| Reverse(entry.danger_score));
    ranking
}

#[cfg(test)]
mod tests {
    use super::*;

    fn danger_row(name: &str, label: &str) -> DangerRow {
        DangerRow {
            isletme_ad: Some(name.to_string()),
            tehlike_turu: Some(label.to_string()),
        }
    }

    #[test]
    fn test_rank_is_stable_for_equal_scores() {
        let rows = vec![
            danger_row("A Orman İşletmesi", "Düşük"),
            danger_row("B Orman İşletmesi", "Çok Yüksek"),
            danger_row("C Orman İşletmesi", "Orta"),
            danger_row("D Orman İşletmesi", "Cok Yuksek"),
            danger_row("E Orman İşletmesi", "Yüksek"),
        ];
        let names: Vec<String> = rank_by_danger(&rows)
            .into_iter()
            .map(|r| r.business_name)
            .collect();
        assert_eq!(names, vec!["B", "D", "E", "C", "A"]);
    }

    #[test]
    fn test_missing_danger_label_ranks_low() {
        let rows = vec![DangerRow {
            isletme_ad: None,
            tehlike_turu: None,
        }];
        let ranking = rank_by_danger(&rows);
        assert_eq!(ranking[0].business_name, DEFAULT_BUSINESS_NAME);
        assert_eq!(ranking[0].level, DangerLevel::Low);
        assert_eq!(ranking[0].danger_score, 25);
    }

    #[test]
    fn test_registry_row_without_name_falls_back_to_id() {
        let registry = vec![BusinessRow {
            isletme_id: Some("42".to_string()),
            isletme_ad: None,
        }];
        let businesses = join_businesses(&registry, &[], &[], &[]);
        assert_eq!(businesses[0].name, "İşletme 42");
        assert_eq!(businesses[0].district_id, "isletme-42");
        assert_eq!(businesses[0].danger_level, DangerLevel::Low);
    }

    #[test]
    fn test_empty_name_uses_id_as_district() {
        let registry = vec![BusinessRow {
            isletme_id: Some("7".to_string()),
            isletme_ad: Some(String::new()),
        }];
        let businesses = join_businesses(&registry, &[], &[], &[]);
        assert_eq!(businesses[0].district_id, "7");
    }

    #[test]
    fn test_row_without_name_or_id_still_gets_a_district() {
        let registry = vec![BusinessRow {
            isletme_id: None,
            isletme_ad: Some(String::new()),
        }];
        let businesses = join_businesses(&registry, &[], &[], &[]);
        assert_eq!(businesses[0].id, "");
        assert_eq!(businesses[0].district_id, UNKNOWN_DISTRICT_ID);
    }

    #[test]
    fn test_csv_export() {
        let data = vec![YearlyFireData { year: 2023, count: 4 }];
        let csv = DashboardService::export_to_csv(&data).unwrap();
        assert_eq!(csv, "year,count\n2023,4\n");
    }

    #[test]
    fn test_csv_export_of_empty_report_keeps_header() {
        let csv = DashboardService::export_to_csv::<TreeTypeData>(&[]).unwrap();
        assert_eq!(csv, "treeType,count\n");
    }

    /// Fixed headers must match what serde would have written
    fn serde_header<T: Serialize>(record: &T) -> String {
        let mut wtr = csv::Writer::from_writer(vec![]);
        wtr.serialize(record).unwrap();
        let out = String::from_utf8(wtr.into_inner().unwrap()).unwrap();
        out.lines().next().unwrap().to_string()
    }

    #[test]
    fn test_csv_headers_match_field_names() {
        assert_eq!(
            serde_header(&VehicleData {
                business_name: "Gemlik".to_string(),
                total_vehicles: 1,
                used_vehicles: 1,
                excess: 0,
            }),
            VehicleData::CSV_HEADERS.join(",")
        );
        assert_eq!(
            serde_header(&DangerRankingData::new("Keles".to_string(), DangerLevel::High)),
            DangerRankingData::CSV_HEADERS.join(",")
        );
        assert_eq!(
            serde_header(&MonthlyFireData::zero_filled()[0]),
            MonthlyFireData::CSV_HEADERS.join(",")
        );
        assert_eq!(
            serde_header(&YearlyFireData { year: 2024, count: 0 }),
            YearlyFireData::CSV_HEADERS.join(",")
        );
        assert_eq!(
            serde_header(&TreeTypeData {
                tree_type: "Kızılçam".to_string(),
                count: 2,
            }),
            TreeTypeData::CSV_HEADERS.join(",")
        );
        assert_eq!(
            serde_header(&FireCauseData {
                cause: "Yıldırım".to_string(),
                count: 2,
            }),
            FireCauseData::CSV_HEADERS.join(",")
        );
    }
}
