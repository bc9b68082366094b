use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;
use sqlx::Row;

use crate::domain::station::errors::StationError;
use crate::domain::station::models::ChargingStation;
use crate::domain::station::models::StationId;
use crate::domain::station::ports::StationRepository;

pub struct PostgresStationRepository {
    pool: PgPool,
}

impl PostgresStationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_station(row: &PgRow) -> Result<ChargingStation, StationError> {
        let status: String = row.try_get("status").map_err(db_error)?;

        Ok(ChargingStation {
            id: StationId(row.try_get("id").map_err(db_error)?),
            name: row.try_get("name").map_err(db_error)?,
            latitude: row.try_get("latitude").map_err(db_error)?,
            longitude: row.try_get("longitude").map_err(db_error)?,
            status: status.parse()?,
            power_output: row.try_get("power_output_kw").map_err(db_error)?,
            connector_type: row.try_get("connector_type").map_err(db_error)?,
        })
    }
}

fn db_error(e: sqlx::Error) -> StationError {
    StationError::DatabaseError(e.to_string())
}

#[async_trait]
impl StationRepository for PostgresStationRepository {
    async fn create(&self, station: ChargingStation) -> Result<ChargingStation, StationError> {
        sqlx::query(
            r#"
            INSERT INTO charging_stations
                (id, name, latitude, longitude, status, power_output_kw, connector_type)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(station.id.0)
        .bind(&station.name)
        .bind(station.latitude)
        .bind(station.longitude)
        .bind(station.status.as_str())
        .bind(station.power_output)
        .bind(&station.connector_type)
        .execute(&self.pool)
        .await
        .map_err(db_error)?;

        Ok(station)
    }

    async fn find_by_id(&self, id: &StationId) -> Result<Option<ChargingStation>, StationError> {
        let row = sqlx::query(
            r#"
            SELECT id, name, latitude, longitude, status, power_output_kw, connector_type
            FROM charging_stations
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error)?;

        row.map(|r| Self::row_to_station(&r)).transpose()
    }

    async fn list_all(&self) -> Result<Vec<ChargingStation>, StationError> {
        let rows = sqlx::query(
            r#"
            SELECT id, name, latitude, longitude, status, power_output_kw, connector_type
            FROM charging_stations
            ORDER BY name
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(db_error)?;

        rows.iter().map(Self::row_to_station).collect()
    }

    async fn update(&self, station: ChargingStation) -> Result<ChargingStation, StationError> {
        let result = sqlx::query(
            r#"
            UPDATE charging_stations
            SET name = $2,
                latitude = $3,
                longitude = $4,
                status = $5,
                power_output_kw = $6,
                connector_type = $7
            WHERE id = $1
            "#,
        )
        .bind(station.id.0)
        .bind(&station.name)
        .bind(station.latitude)
        .bind(station.longitude)
        .bind(station.status.as_str())
        .bind(station.power_output)
        .bind(&station.connector_type)
        .execute(&self.pool)
        .await
        .map_err(db_error)?;

        if result.rows_affected() == 0 {
            return Err(StationError::NotFound);
        }

        Ok(station)
    }

    async fn delete(&self, id: &StationId) -> Result<(), StationError> {
        sqlx::query("DELETE FROM charging_stations WHERE id = $1")
            .bind(id.0)
            .execute(&self.pool)
            .await
            .map_err(db_error)?;

        Ok(())
    }
}
