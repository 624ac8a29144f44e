// SPDX-License-Identifier: MPL-2.0
use araucarias::assets::AssetResolver;
use araucarias::config::{self, SiteConfig};
use araucarias::contact::{ContactClient, Inquiry, InquirySource, SubmissionState};
use araucarias::gallery::{CategoryFilter, GalleryCatalog};
use araucarias::pages::Page;
use araucarias::suites::{format_price, SuiteCatalog, TypeFilter};
use std::path::PathBuf;
use std::process::ExitCode;

const HELP: &str = "\
araucarias - content tools for the Araucarias Apartamentos site

USAGE:
  araucarias [--config <path>] <command> [options]

COMMANDS:
  gallery [--category <slug>] [--json]
          List gallery photos, optionally filtered by category
  show <id>
          Show one photo with its position and neighbors
  suites [--type <slug>] [--all] [--json]
          List bookable units (--all includes unavailable ones)
  suite <slug>
          Show one unit in full
  routes  List the site's routes
  resolve <path>...
          Resolve asset paths against the configured base URL
  inquire --name <..> --email <..> --phone <..> --message <..> [--source <slug>]
          Submit a contact inquiry to the configured endpoint

OPTIONS:
  --config <path>   Read settings from a specific site.toml
  -h, --help        Print this help
  -V, --version     Print the version
";

type CliResult = std::result::Result<(), Box<dyn std::error::Error>>;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("Error: {error}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> CliResult {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }
    if args.contains(["-V", "--version"]) {
        println!("araucarias {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let site_config = match args.opt_value_from_str::<_, PathBuf>("--config")? {
        Some(path) => config::load_from_path(&path)?,
        None => config::load()?,
    };

    match args.subcommand()?.as_deref() {
        Some("gallery") => cmd_gallery(args),
        Some("show") => cmd_show(args),
        Some("suites") => cmd_suites(args),
        Some("suite") => cmd_suite(args),
        Some("routes") => cmd_routes(args),
        Some("resolve") => cmd_resolve(args, &site_config),
        Some("inquire") => cmd_inquire(args, &site_config),
        Some(other) => Err(format!("unknown command '{other}', see --help").into()),
        None => {
            print!("{HELP}");
            Ok(())
        }
    }
}

fn finish(args: pico_args::Arguments) -> CliResult {
    let remaining = args.finish();
    if remaining.is_empty() {
        Ok(())
    } else {
        Err(format!("unexpected arguments: {remaining:?}").into())
    }
}

fn cmd_gallery(mut args: pico_args::Arguments) -> CliResult {
    let category: Option<String> = args.opt_value_from_str("--category")?;
    let json = args.contains("--json");
    finish(args)?;

    let slug = category.as_deref().unwrap_or("all");
    if CategoryFilter::from_slug(slug).is_none() {
        return Err(format!("unknown category '{slug}'").into());
    }

    let catalog = GalleryCatalog::builtin();
    let items = catalog.filter_by_slug(slug);
    if json {
        println!("{}", serde_json::to_string_pretty(&items)?);
        return Ok(());
    }
    for item in &items {
        println!(
            "{:>2}. [{:<12}] {:<26} {}",
            catalog.position_of(&item.id),
            item.category,
            item.id,
            item.aspect_ratio
        );
    }
    println!("{} of {} photos", items.len(), catalog.len());
    Ok(())
}

fn cmd_show(mut args: pico_args::Arguments) -> CliResult {
    let id: String = args.free_from_str()?;
    finish(args)?;

    let catalog = GalleryCatalog::builtin();
    let item = catalog
        .find_by_id(&id)
        .ok_or_else(|| format!("no photo with id '{id}'"))?;

    println!("{} ({} of {})", item.id, catalog.position_of(&id), catalog.len());
    println!("  src:      {}", item.src);
    println!("  alt:      {}", item.alt);
    println!("  category: {}", item.category);
    println!("  aspect:   {}", item.aspect_ratio);
    if let Some(previous) = catalog.previous(&id) {
        println!("  previous: {}", previous.id);
    }
    if let Some(next) = catalog.next(&id) {
        println!("  next:     {}", next.id);
    }
    Ok(())
}

fn cmd_suites(mut args: pico_args::Arguments) -> CliResult {
    let type_slug: Option<String> = args.opt_value_from_str("--type")?;
    let include_all = args.contains("--all");
    let json = args.contains("--json");
    finish(args)?;

    let slug = type_slug.as_deref().unwrap_or("all");
    if TypeFilter::from_slug(slug).is_none() {
        return Err(format!("unknown suite type '{slug}'").into());
    }

    let catalog = SuiteCatalog::builtin();
    let listing = if include_all {
        catalog.suites().iter().collect()
    } else {
        catalog.of_type_slug(slug)
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&listing)?);
        return Ok(());
    }
    for suite in &listing {
        let marker = if suite.available { ' ' } else { '*' };
        println!(
            "{marker} {:<10} {:<16} {} guests  {}",
            suite.suite_type,
            suite.slug,
            suite.capacity.guests,
            format_price(suite.price)
        );
    }
    if listing.iter().any(|s| !s.available) {
        println!("  * not yet bookable");
    }
    Ok(())
}

fn cmd_suite(mut args: pico_args::Arguments) -> CliResult {
    let slug: String = args.free_from_str()?;
    finish(args)?;

    let catalog = SuiteCatalog::builtin();
    let suite = catalog
        .by_slug(&slug)
        .ok_or_else(|| format!("no suite with slug '{slug}'"))?;

    let amenities: Vec<&str> = suite.amenities.iter().map(|a| a.slug()).collect();
    let highlights: Vec<&str> = suite.highlights.iter().map(|a| a.slug()).collect();

    println!("{} ({})", suite.id, suite.suite_type);
    println!("  slug:       {}", suite.slug);
    println!("  price:      {}", format_price(suite.price));
    println!("  available:  {}", if suite.available { "yes" } else { "not yet" });
    println!(
        "  capacity:   {} guests, {} bedrooms, {} bathrooms{}",
        suite.capacity.guests,
        suite.capacity.bedrooms,
        suite.capacity.bathrooms,
        if suite.capacity.toilettes > 0 {
            format!(", {} toilette", suite.capacity.toilettes)
        } else {
            String::new()
        }
    );
    println!("  beds:       {}", suite.bed_size);
    println!("  amenities:  {}", amenities.join(", "));
    println!("  highlights: {}", highlights.join(", "));
    println!("  images:");
    for image in &suite.images {
        println!("    {image}");
    }
    Ok(())
}

fn cmd_routes(args: pico_args::Arguments) -> CliResult {
    finish(args)?;
    for page in Page::ALL {
        let kind = if page.is_in_nav() { "nav" } else { "cta" };
        println!("{:<16} {kind}", page.route());
    }
    Ok(())
}

fn cmd_resolve(args: pico_args::Arguments, site_config: &SiteConfig) -> CliResult {
    let remaining = args.finish();
    if remaining.is_empty() {
        return Err("resolve needs at least one path".into());
    }
    let resolver = AssetResolver::new(site_config.assets.base_url.clone());
    for os_path in remaining {
        let path = os_path
            .into_string()
            .map_err(|bad| format!("path is not valid UTF-8: {bad:?}"))?;
        println!("{}", resolver.resolve(&path));
    }
    Ok(())
}

fn cmd_inquire(mut args: pico_args::Arguments, site_config: &SiteConfig) -> CliResult {
    let source = match args.opt_value_from_str::<_, String>("--source")? {
        Some(slug) => Some(
            InquirySource::from_slug(&slug).ok_or_else(|| format!("unknown source '{slug}'"))?,
        ),
        None => None,
    };
    let inquiry = Inquiry {
        name: args.value_from_str("--name")?,
        email: args.value_from_str("--email")?,
        phone: args.value_from_str("--phone")?,
        message: args.value_from_str("--message")?,
        source,
    };
    finish(args)?;

    let client = ContactClient::new(&site_config.contact)?;
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    let mut state = SubmissionState::default();
    state.begin();
    let outcome = runtime.block_on(client.submit(&inquiry));
    state.settle(&outcome);

    if let Some(message) = state.rejection_message() {
        return Err(message.to_string().into());
    }
    println!("Consulta enviada. Te responderemos a la brevedad.");
    Ok(())
}
