//! Herramienta interactiva para probar una instancia en ejecución del
//! backend del parqueadero.
//!
//! Uso: `cargo run -- [URL_BASE]` (por defecto `http://localhost:8000` o
//! la variable `PARQUEADERO_URL`).

use anyhow::Result;
use colored::*;
use reqwest::{Client, Method};
use serde_json::{json, Value};
use std::io::{self, Write};

#[tokio::main]
async fn main() -> Result<()> {
    let base_url = std::env::args()
        .nth(1)
        .or_else(|| std::env::var("PARQUEADERO_URL").ok())
        .unwrap_or_else(|| "http://localhost:8000".to_string());
    let base_url = base_url.trim_end_matches('/').to_string();
    let client = Client::new();

    println!("{}", "🅿️  Parqueadero Testing Tool".bright_blue().bold());
    println!("{}", "=====================================".bright_blue());
    println!("Servidor: {}", base_url.bright_white());

    loop {
        println!();
        println!("{}", "📋 MENÚ PRINCIPAL".bright_green().bold());
        println!("{}", "==================".bright_green());
        println!("1. 🩺 Health check");
        println!("2. 🅿️  Estado de puestos");
        println!("3. 📊 Contadores del día");
        println!("4. 🔐 Login de empleado");
        println!("5. 📱 Login de beneficiario");
        println!("6. 🔳 Obtener QR de un beneficiario");
        println!("7. 🚪 Salir");
        print!("{}", "Selecciona una opción (1-7): ".bright_yellow());
        io::stdout().flush()?;

        let choice = read_line()?;
        let result = match choice.as_str() {
            "1" => call(&client, Method::GET, &format!("{}/health", base_url), None).await,
            "2" => show_puestos(&client, &base_url).await,
            "3" => show_counters(&client, &base_url).await,
            "4" => login(&client, &format!("{}/iniciar_sesion", base_url)).await,
            "5" => login(&client, &format!("{}/login", base_url)).await,
            "6" => show_qr(&client, &base_url).await,
            "7" => {
                println!("{}", "👋 ¡Hasta luego!".bright_green());
                break;
            }
            _ => {
                println!("{}", "❌ Opción inválida. Intenta de nuevo.".bright_red());
                Ok(Value::Null)
            }
        };

        if let Err(e) = result {
            println!("{} {}", "❌ Error de red:".bright_red(), e);
        }
    }

    Ok(())
}

fn read_line() -> Result<String> {
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

fn prompt(label: &str) -> Result<String> {
    print!("{}", label.bright_yellow());
    io::stdout().flush()?;
    read_line()
}

/// Ejecutar un request, imprimir status y body, y devolver el body
async fn call(client: &Client, method: Method, url: &str, body: Option<Value>) -> Result<Value> {
    println!("{} {} {}", "📤".bright_blue(), method, url);

    let mut request = client.request(method, url);
    if let Some(body) = body {
        request = request.json(&body);
    }
    let response = request.send().await?;
    let status = response.status();
    let body: Value = response.json().await.unwrap_or(Value::Null);

    let status_text = format!("📥 {}", status);
    if status.is_success() {
        println!("{}", status_text.bright_green().bold());
    } else {
        println!("{}", status_text.bright_red().bold());
    }
    Ok(body)
}

async fn show_puestos(client: &Client, base_url: &str) -> Result<Value> {
    let body = call(client, Method::GET, &format!("{}/puestos/", base_url), None).await?;

    if let Some(puestos) = body["puestos"].as_array() {
        for puesto in puestos {
            let id = puesto["id"].as_i64().unwrap_or_default();
            match puesto["estado"].as_str() {
                Some("ocupado") => println!("  {:>2} {}", id, "ocupado".bright_red()),
                Some(estado) => println!("  {:>2} {}", id, estado.bright_green()),
                None => println!("  {:>2} ?", id),
            }
        }
    } else {
        println!("{}", serde_json::to_string_pretty(&body)?);
    }
    Ok(body)
}

async fn show_counters(client: &Client, base_url: &str) -> Result<Value> {
    for path in ["ingreso_dia", "salida_dia", "total_bene"] {
        let body = call(client, Method::GET, &format!("{}/{}", base_url, path), None).await?;
        println!("{}", serde_json::to_string_pretty(&body)?);
    }
    Ok(Value::Null)
}

async fn login(client: &Client, url: &str) -> Result<Value> {
    let usuario = prompt("Usuario: ")?;
    let contrasena = prompt("Contraseña: ")?;

    let body = call(
        client,
        Method::POST,
        url,
        Some(json!({ "usuario": usuario, "contrasena": contrasena })),
    )
    .await?;
    println!("{}", serde_json::to_string_pretty(&body)?);
    Ok(body)
}

async fn show_qr(client: &Client, base_url: &str) -> Result<Value> {
    let usuario = prompt("Usuario del beneficiario: ")?;
    let body = call(
        client,
        Method::GET,
        &format!("{}/obtener_qr/{}", base_url, usuario),
        None,
    )
    .await?;

    match body["qr_code"].as_str() {
        Some(qr) => println!(
            "{} {} caracteres base64",
            "✅ QR recibido:".bright_green(),
            qr.len()
        ),
        None => println!("{}", serde_json::to_string_pretty(&body)?),
    }
    Ok(body)
}
