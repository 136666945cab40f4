//! Bazaar demo session.
//!
//! Opens the storefront with configuration from the environment and replays
//! a short scripted shopping session, logging each step. State persists to
//! `BAZAAR_STORAGE_DIR` between runs.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::process::ExitCode;

use bazaar_core::{CategoryFilter, ProductId};
use bazaar_storefront::telemetry::init_tracing;
use bazaar_storefront::{Storefront, StorefrontConfig, StorefrontEvent};

fn main() -> ExitCode {
    init_tracing(std::env::var("BAZAAR_LOG_JSON").is_ok_and(|v| v == "1"));

    let config = match StorefrontConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "Failed to load configuration");
            return ExitCode::FAILURE;
        }
    };

    let mut storefront = match Storefront::open(&config) {
        Ok(storefront) => storefront,
        Err(e) => {
            tracing::error!(error = %e, "Failed to open storefront");
            return ExitCode::FAILURE;
        }
    };

    run_session(&mut storefront);
    ExitCode::SUCCESS
}

fn run_session(storefront: &mut Storefront) {
    storefront.dispatch(StorefrontEvent::SearchChanged {
        search: "wireless".to_string(),
    });
    log_results(storefront, "Searched for \"wireless\"");

    storefront.dispatch(StorefrontEvent::CategoryChanged {
        category: CategoryFilter::from("Electronics"),
    });
    log_results(storefront, "Filtered to Electronics");

    let first = storefront
        .browser()
        .result_ids()
        .and_then(|ids| ids.first())
        .cloned();
    if let Some(product_id) = first {
        add_and_save(storefront, product_id);
    }

    storefront.dispatch(StorefrontEvent::SearchAndFiltersCleared);
    log_results(storefront, "Cleared search and filters");

    for line in storefront.cart().lines() {
        tracing::info!(
            product = %line.product.name,
            quantity = line.quantity,
            line_total = %line.line_total,
            "Cart line"
        );
    }

    let summary = storefront.summary();
    tracing::info!(
        cart_items = summary.cart_item_count,
        cart_total = %summary.cart_total,
        wishlist = summary.wishlist_count,
        theme = %summary.theme,
        "Session finished"
    );
}

fn add_and_save(storefront: &mut Storefront, product_id: ProductId) {
    storefront.dispatch(StorefrontEvent::AddToCart {
        product_id: product_id.clone(),
    });
    storefront.dispatch(StorefrontEvent::AddToWishlist {
        product_id: product_id.clone(),
    });
    tracing::info!(
        %product_id,
        quantity = storefront.cart().quantity_of(&product_id),
        "Added to cart and wishlist"
    );
}

fn log_results(storefront: &Storefront, step: &str) {
    let names: Vec<&str> = storefront
        .browser()
        .results()
        .unwrap_or_default()
        .into_iter()
        .map(|product| product.name.as_str())
        .collect();
    let total = storefront.catalog().len();
    tracing::info!(shown = names.len(), total, ?names, "{step}");
}
