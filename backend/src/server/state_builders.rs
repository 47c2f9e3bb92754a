//! Wiring of Diesel adapters into the HTTP state.

use std::sync::Arc;

use actix_web::web;

use backend::domain::AccountServiceImpl;
use backend::inbound::http::state::HttpState;
use backend::outbound::persistence::{
    DbPool, DieselActivityRepository, DieselPantryRepository, DieselRecipeRepository,
    DieselUserRepository,
};

/// Build the handler state with every port backed by `pool`.
pub fn build_http_state(pool: &DbPool) -> web::Data<HttpState> {
    let users = Arc::new(DieselUserRepository::new(pool.clone()));
    web::Data::new(HttpState::new(
        Arc::new(DieselActivityRepository::new(pool.clone())),
        Arc::new(AccountServiceImpl::new(users)),
        Arc::new(DieselRecipeRepository::new(pool.clone())),
        Arc::new(DieselPantryRepository::new(pool.clone())),
    ))
}
