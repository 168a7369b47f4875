//! Database seeding with the reference catalog.
//!
//! Seeding clears and repopulates both tables inside a single transaction so
//! no concurrent request observes a half-seeded catalog.

use rust_decimal::Decimal;
use sqlx::PgPool;
use thiserror::Error;

use kitlocker_core::Price;

use super::RepositoryError;
use crate::services::auth::{self, AuthError};

/// Errors that can occur while seeding.
#[derive(Debug, Error)]
pub enum SeedError {
    /// Database operation failed.
    #[error("database error: {0}")]
    Repository(#[from] RepositoryError),

    /// Raw sqlx error from a seeding statement.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Password hashing for a seed account failed.
    #[error("auth error: {0}")]
    Auth(#[from] AuthError),
}

/// Counts of what the seeder inserted.
#[derive(Debug, Clone, Copy)]
pub struct SeedSummary {
    pub users: usize,
    pub shirts: usize,
}

struct SeedUser {
    username: &'static str,
    email: &'static str,
    password: &'static str,
}

struct SeedShirt {
    team_name: &'static str,
    shirt_image: &'static str,
    price_pence: i64,
    description: &'static str,
    /// Score in tenths (65 means 6.5), where known.
    environmental_impact_tenths: Option<i64>,
    extended_description: &'static str,
    /// Index into [`SEED_USERS`].
    owner: usize,
}

const SEED_USERS: &[SeedUser] = &[
    SeedUser {
        username: "Alice",
        email: "alice@example.com",
        password: "password123",
    },
    SeedUser {
        username: "Bob",
        email: "bob@example.com",
        password: "password123",
    },
];

const SEED_SHIRTS: &[SeedShirt] = &[
    SeedShirt {
        team_name: "Everton",
        shirt_image: "everton.jpg",
        price_pence: 2999,
        description: "Everton home shirt from 1992",
        environmental_impact_tenths: Some(65),
        extended_description: "This Everton team made up of the likes of Neville Southall, \
             Martin Keown and Andy Hinchliffe. Led by the legendary Howard Kendall with this shirt.",
        owner: 0,
    },
    SeedShirt {
        team_name: "AC Milan",
        shirt_image: "ac_milan.jpg",
        price_pence: 2999,
        description: "AC Milan home shirt from 2007",
        environmental_impact_tenths: Some(45),
        extended_description: "During this season AC Milan played their 74th season in the first \
             division of Italian football under the famous Carlo Ancelotti. They also won the club \
             world cup this season.",
        owner: 1,
    },
    SeedShirt {
        team_name: "England National Team",
        shirt_image: "england.jpg",
        price_pence: 2999,
        description: "England third team shirt from 1990",
        environmental_impact_tenths: Some(85),
        extended_description: "The England team from this year consisted of some legendary \
             players, most notably Paul Gascoigne, Gary Lineker and Peter Shilton between the sticks.",
        owner: 0,
    },
    SeedShirt {
        team_name: "Netherlands National Team",
        shirt_image: "netherlands.jpg",
        price_pence: 2999,
        description: "Netherlands home shirt from 1988",
        environmental_impact_tenths: Some(75),
        extended_description: "This well known shirt from the Netherlands was worn by many world \
             renowned players such as Ronald Koeman, Frank Rijkaard, Marco Van Basten and Ruud Gullit",
        owner: 1,
    },
    SeedShirt {
        team_name: "Manchester United",
        shirt_image: "man_utd.jpg",
        price_pence: 2999,
        description: "Manchester United shirt from 1999",
        environmental_impact_tenths: Some(95),
        extended_description: "In our opinion this is what everyone thinks of when we mention an \
             old United shirt. This shirt was worn by players such as Gary Neville, David Beckham, \
             Phil Neville and Ryan Giggs",
        owner: 0,
    },
    SeedShirt {
        team_name: "Celtic",
        shirt_image: "celtic.jpg",
        price_pence: 2499,
        description: "Celtic home shirt from 1997",
        environmental_impact_tenths: Some(55),
        extended_description: "This shirt is a stalwart of Scottish football which was worn by \
             the likes of Henrik Larsson and Alan Stubbs",
        owner: 1,
    },
];

/// Clear and repopulate the catalog with the reference data set.
///
/// Runs as a single transaction: either the whole catalog is replaced or
/// nothing changes.
///
/// # Errors
///
/// Returns `SeedError` if any statement or password hash fails; the
/// transaction is rolled back on drop.
pub async fn run(pool: &PgPool) -> Result<SeedSummary, SeedError> {
    let mut tx = pool.begin().await?;

    sqlx::query("DELETE FROM shirts").execute(&mut *tx).await?;
    sqlx::query("DELETE FROM users").execute(&mut *tx).await?;

    let mut user_ids: Vec<i32> = Vec::with_capacity(SEED_USERS.len());
    for user in SEED_USERS {
        let password_hash = auth::hash_password(user.password)?;
        let (id,): (i32,) = sqlx::query_as(
            "INSERT INTO users (username, email, password) VALUES ($1, $2, $3) RETURNING id",
        )
        .bind(user.username)
        .bind(user.email)
        .bind(&password_hash)
        .fetch_one(&mut *tx)
        .await?;
        user_ids.push(id);
    }

    for shirt in SEED_SHIRTS {
        let owner_id = user_ids
            .get(shirt.owner)
            .copied()
            .ok_or(RepositoryError::NotFound)?;
        sqlx::query(
            "INSERT INTO shirts (team_name, shirt_image, price, description, \
             environmental_impact, extended_description, owner_id) \
             VALUES ($1, $2, $3, $4, $5, $6, $7)",
        )
        .bind(shirt.team_name)
        .bind(shirt.shirt_image)
        .bind(Price::from_pence(shirt.price_pence))
        .bind(shirt.description)
        .bind(
            shirt
                .environmental_impact_tenths
                .map(|tenths| Decimal::new(tenths, 1)),
        )
        .bind(shirt.extended_description)
        .bind(owner_id)
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;

    Ok(SeedSummary {
        users: SEED_USERS.len(),
        shirts: SEED_SHIRTS.len(),
    })
}
