//! Seeds a local database with demo accounts and vehicles so the staff
//! dashboard has something to show. Safe to re-run; existing rows are kept.

use sqlx::{postgres::PgPoolOptions, PgPool};
use tracing::info;
use uuid::Uuid;

use parkwatch::auth::password::hash_password;
use parkwatch::auth::repo::Role;
use parkwatch::config::AppConfig;

struct DemoVehicle {
    license_plate: &'static str,
    owner_name: &'static str,
    owner_email: &'static str,
    owner_phone: &'static str,
    vehicle_model: &'static str,
    vehicle_color: &'static str,
    status: &'static str,
    notes: &'static str,
}

const DEMO_VEHICLES: &[DemoVehicle] = &[
    DemoVehicle {
        license_plate: "ABC123",
        owner_name: "John Doe",
        owner_email: "john@example.com",
        owner_phone: "+1234567890",
        vehicle_model: "Toyota Camry",
        vehicle_color: "Blue",
        status: "registered",
        notes: "Regular employee vehicle",
    },
    DemoVehicle {
        license_plate: "XYZ789",
        owner_name: "Jane Smith",
        owner_email: "jane@example.com",
        owner_phone: "+1987654321",
        vehicle_model: "Honda Civic",
        vehicle_color: "Red",
        status: "registered",
        notes: "Visitor vehicle",
    },
    DemoVehicle {
        license_plate: "DEF456",
        owner_name: "Bob Johnson",
        owner_email: "bob@example.com",
        owner_phone: "+1122334455",
        vehicle_model: "Ford F-150",
        vehicle_color: "Black",
        status: "pending",
        notes: "Pending verification",
    },
];

async fn ensure_user(
    db: &PgPool,
    email: &str,
    password: &str,
    role: Role,
    name: &str,
) -> anyhow::Result<Uuid> {
    let hash = hash_password(password)?;
    sqlx::query(
        r#"
        INSERT INTO users (email, password_hash, name, role)
        VALUES ($1, $2, $3, $4)
        ON CONFLICT (email) DO NOTHING
        "#,
    )
    .bind(email)
    .bind(&hash)
    .bind(name)
    .bind(role)
    .execute(db)
    .await?;

    let id = sqlx::query_scalar::<_, Uuid>("SELECT id FROM users WHERE email = $1")
        .bind(email)
        .fetch_one(db)
        .await?;
    Ok(id)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let env_filter =
        std::env::var("RUST_LOG").unwrap_or_else(|_| "parkwatch=info,seed=info".to_string());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let config = AppConfig::from_env()?;
    let db = PgPoolOptions::new()
        .max_connections(2)
        .connect(&config.database_url)
        .await?;

    sqlx::migrate!("./migrations").run(&db).await?;

    let password =
        std::env::var("SEED_PASSWORD").unwrap_or_else(|_| "parkwatch-dev".to_string());

    let admin_id = ensure_user(&db, "admin@parkwatch.local", &password, Role::Admin, "Admin").await?;
    let staff_id = ensure_user(
        &db,
        "staff@parkwatch.local",
        &password,
        Role::Staff,
        "Gate Staff",
    )
    .await?;
    info!(%admin_id, %staff_id, "demo accounts ready");

    for v in DEMO_VEHICLES {
        let inserted = sqlx::query(
            r#"
            INSERT INTO vehicles (license_plate, owner_name, owner_email, owner_phone,
                                  vehicle_model, vehicle_color, status, registered_by, notes)
            VALUES ($1, $2, $3, $4, $5, $6, $7::vehicle_status, $8, $9)
            ON CONFLICT (license_plate) DO NOTHING
            "#,
        )
        .bind(v.license_plate)
        .bind(v.owner_name)
        .bind(v.owner_email)
        .bind(v.owner_phone)
        .bind(v.vehicle_model)
        .bind(v.vehicle_color)
        .bind(v.status)
        .bind(staff_id)
        .bind(v.notes)
        .execute(&db)
        .await?
        .rows_affected();

        if inserted > 0 {
            info!(plate = v.license_plate, "demo vehicle seeded");
        }
    }

    info!("seed complete");
    Ok(())
}
