//! Route table for the REST API.

use actix_web::web;

use super::accounts::{login, register};
use super::activities::{create_activity, delete_activity, list_activities, update_activity};
use super::error::json_error_handler;
use super::pantry::{create_pantry_item, delete_pantry_item, list_pantry_items, update_pantry_item};
use super::recipes::{create_recipe, list_recipes, update_recipe};

/// Register every record endpoint and the JSON body error handler.
///
/// Handlers expect `web::Data<HttpState>` to be registered by the caller.
///
/// # Examples
/// ```
/// use actix_web::{App, web};
/// use backend::inbound::http::router::configure;
///
/// let app = App::new().configure(configure);
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .service(list_activities)
        .service(create_activity)
        .service(update_activity)
        .service(delete_activity)
        .service(register)
        .service(login)
        .service(list_recipes)
        .service(create_recipe)
        .service(update_recipe)
        .service(list_pantry_items)
        .service(create_pantry_item)
        .service(update_pantry_item)
        .service(delete_pantry_item);
}
