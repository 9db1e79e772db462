//! Almacén de flota sobre PostgreSQL
//!
//! Cada empresa se guarda como un documento JSONB completo en la tabla
//! `companies`. El append de vehículo usa `jsonb_set` sobre el array
//! `vehiculos` para que sea una sola sentencia atómica; el reemplazo de
//! lista sobreescribe el array entero (last-write-wins, sin control de
//! versión). Tras cada escritura se recarga la colección y se publica
//! el snapshot por el canal watch.

use async_trait::async_trait;
use sqlx::PgPool;
use tokio::sync::watch;
use uuid::Uuid;

use crate::models::{Company, Vehicle};
use crate::repositories::fleet_store::FleetStore;
use crate::utils::errors::{not_found_error, AppResult};

pub struct PostgresFleetStore {
    pool: PgPool,
    snapshot_tx: watch::Sender<Vec<Company>>,
}

impl PostgresFleetStore {
    /// Crea el esquema si hace falta y carga el snapshot inicial.
    pub async fn new(pool: PgPool) -> AppResult<Self> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS companies (
                id UUID PRIMARY KEY,
                data JSONB NOT NULL,
                created_at TIMESTAMPTZ NOT NULL DEFAULT now()
            )
            "#,
        )
        .execute(&pool)
        .await?;

        let initial = fetch_all(&pool).await?;
        let (snapshot_tx, _) = watch::channel(initial);

        Ok(Self { pool, snapshot_tx })
    }

    async fn refresh_snapshot(&self) -> AppResult<()> {
        let companies = fetch_all(&self.pool).await?;
        self.snapshot_tx.send_replace(companies);
        Ok(())
    }
}

async fn fetch_all(pool: &PgPool) -> AppResult<Vec<Company>> {
    let rows: Vec<serde_json::Value> =
        sqlx::query_scalar("SELECT data FROM companies ORDER BY created_at, id")
            .fetch_all(pool)
            .await?;

    rows.into_iter()
        .map(|data| serde_json::from_value(data).map_err(Into::into))
        .collect()
}

#[async_trait]
impl FleetStore for PostgresFleetStore {
    fn subscribe(&self) -> watch::Receiver<Vec<Company>> {
        self.snapshot_tx.subscribe()
    }

    async fn create_company(&self, company: Company) -> AppResult<Company> {
        sqlx::query("INSERT INTO companies (id, data) VALUES ($1, $2)")
            .bind(company.id)
            .bind(serde_json::to_value(&company)?)
            .execute(&self.pool)
            .await?;

        self.refresh_snapshot().await?;
        Ok(company)
    }

    async fn append_vehicle(&self, company_id: Uuid, vehicle: Vehicle) -> AppResult<()> {
        // jsonb `||` con un operando no-array lo anexa como elemento.
        let result = sqlx::query(
            r#"
            UPDATE companies
            SET data = jsonb_set(
                data,
                '{vehiculos}',
                COALESCE(data->'vehiculos', '[]'::jsonb) || $2::jsonb
            )
            WHERE id = $1
            "#,
        )
        .bind(company_id)
        .bind(serde_json::to_value(&vehicle)?)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(not_found_error("Empresa", &company_id.to_string()));
        }

        self.refresh_snapshot().await
    }

    async fn replace_vehicle_list(
        &self,
        company_id: Uuid,
        vehiculos: Vec<Vehicle>,
    ) -> AppResult<()> {
        let result = sqlx::query(
            "UPDATE companies SET data = jsonb_set(data, '{vehiculos}', $2::jsonb) WHERE id = $1",
        )
        .bind(company_id)
        .bind(serde_json::to_value(&vehiculos)?)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(not_found_error("Empresa", &company_id.to_string()));
        }

        self.refresh_snapshot().await
    }

    async fn list_companies(&self) -> AppResult<Vec<Company>> {
        fetch_all(&self.pool).await
    }

    async fn find_company(&self, id: Uuid) -> AppResult<Option<Company>> {
        let row: Option<serde_json::Value> =
            sqlx::query_scalar("SELECT data FROM companies WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        row.map(|data| serde_json::from_value(data).map_err(Into::into))
            .transpose()
    }
}
