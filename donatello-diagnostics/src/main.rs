//! Donatello backend diagnostics.
//!
//! Sequentially probes the three external dependencies the backend leans on
//! (Gemini API, walrus CLI, CORS layer) and prints a pass/fail summary.
//! A failed probe never aborts the run; the summary is the product.

mod probes;

use donatello_backend::config::DonatelloConfig;

fn status(ok: bool) -> &'static str {
    if ok {
        "\u{2705}"
    } else {
        "\u{274C}"
    }
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    println!("\u{1F50D} Donatello Backend Diagnostics");
    println!("=====================================");

    let gemini_ok = probes::check_gemini_api().await;
    let walrus_ok = probes::check_walrus_cli().await;
    let cors_ok = match DonatelloConfig::load() {
        Ok(config) => probes::check_cors_layer(&config.cors.allowed_origins),
        Err(e) => {
            println!("\n\u{1F310} Testing CORS layer...");
            println!("\u{274C} Failed to load configuration: {}", e);
            false
        }
    };

    println!("\n\u{1F4CA} Summary:");
    println!("Gemini API: {}", status(gemini_ok));
    println!("Walrus CLI: {}", status(walrus_ok));
    println!("CORS layer: {}", status(cors_ok));

    if gemini_ok && walrus_ok && cors_ok {
        println!("\n\u{1F389} All systems ready! The backend should work properly.");
    } else {
        println!("\n\u{26A0}\u{FE0F}  Some components need attention. Fix the issues above.");
    }

    println!("\n\u{1F4A1} Next steps:");
    println!("1. Fix any failed components above");
    println!("2. Export {} and keep GEMINI_TEXT_MODEL current", probes::API_KEY_VAR);
    println!("3. Restart the backend server");
    println!("4. Test the Next.js frontend");
}
