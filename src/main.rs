use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::error;

use catalogo::config::CatalogConfig;
use catalogo::constants::ALL_CATEGORIES;
use catalogo::fetch::HttpFetcher;
use catalogo::links::wa_link;
use catalogo::loader::CatalogLoader;
use catalogo::logging;
use catalogo::pagination::PageControl;
use catalogo::registry::SourceRegistry;
use catalogo::state::CatalogState;
use catalogo::types::Product;

#[derive(Parser)]
#[command(name = "catalogo")]
#[command(about = "Storefront catalog browser")]
#[command(version = "0.1.0")]
struct Cli {
    /// TOML configuration file (defaults to $CATALOG_CONFIG, then built-ins)
    #[arg(long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the registered categories
    Categories,
    /// Show one page of the catalog
    Browse {
        /// Category to browse, or "Todos" for the cross-category sample
        #[arg(long, default_value = ALL_CATEGORIES)]
        category: String,
        /// Search text matched against title, description and id
        #[arg(long, default_value = "")]
        search: String,
        /// 1-indexed page to show
        #[arg(long, default_value_t = 1)]
        page: usize,
    },
    /// Show the featured sample across categories
    Featured,
    /// Print a WhatsApp contact link
    Link {
        /// Message to pre-fill; defaults to the configured general text
        #[arg(long)]
        text: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    logging::init_logging();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => CatalogConfig::load(path)?,
        None => CatalogConfig::from_env()?,
    };

    let registry = SourceRegistry::from_config(&config);
    let loader = CatalogLoader::new(
        registry,
        Arc::new(HttpFetcher::new()),
        config.all_sample_per_category,
    );

    match cli.command {
        Commands::Categories => {
            for category in loader.registry().categories() {
                println!("{category}");
            }
        }
        Commands::Browse {
            category,
            search,
            page,
        } => {
            let mut state = CatalogState::new(config.page_size);
            if let Err(err) = state.set_category(&loader, &category).await {
                error!(%category, error = %err, "category failed to load");
                eprintln!("⚠️  No se pudo cargar la categoría {category}: {err}");
            }
            state.set_search(search);
            state.set_page(page);
            print_page(&state);
        }
        Commands::Featured => {
            let featured = loader.load_featured(config.featured_count).await;
            if featured.is_empty() {
                println!("No hay productos para mostrar.");
            }
            for product in &featured {
                print_product(product);
            }
        }
        Commands::Link { text } => {
            let text = text.unwrap_or_else(|| config.whatsapp_text_general.clone());
            println!("{}", wa_link(&config.whatsapp_number, &text));
        }
    }

    Ok(())
}

fn print_page(state: &CatalogState) {
    let items = state.current_page_items();
    if items.is_empty() {
        println!("No hay productos para mostrar.");
        return;
    }
    for product in items {
        print_product(product);
    }
    println!(
        "\nPágina {} de {} ({} resultados)",
        state.page(),
        state.total_pages(),
        state.result_count()
    );
    let row = state
        .pagination()
        .iter()
        .map(render_control)
        .collect::<Vec<_>>()
        .join("  ");
    if !row.is_empty() {
        println!("{row}");
    }
}

fn print_product(product: &Product) {
    println!(
        "[{}] {} · USD {:.2} ({})",
        if product.id.is_empty() {
            "-"
        } else {
            &product.id
        },
        product.title,
        product.price,
        product.category
    );
    if !product.description.is_empty() {
        println!("    {}", product.description);
    }
}

fn render_control(control: &PageControl) -> String {
    match control {
        PageControl::First { enabled } => mark("« Primero", *enabled),
        PageControl::Previous { enabled } => mark("‹ Anterior", *enabled),
        PageControl::Number { page, current } => {
            if *current {
                format!("[{page}]")
            } else {
                page.to_string()
            }
        }
        PageControl::Next { enabled } => mark("Siguiente ›", *enabled),
        PageControl::Last { enabled } => mark("Final »", *enabled),
    }
}

fn mark(label: &str, enabled: bool) -> String {
    if enabled {
        label.to_string()
    } else {
        format!("({label})")
    }
}
