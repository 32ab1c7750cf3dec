/// Report tool over the experiment engine
use electrochem_lab::config::EngineConfig;
use electrochem_lab::engine::Engine;
use electrochem_lab::experiment::{format_result, Catalog, InputField, InputSet, KindTag, BUILTIN_CATALOG};
use electrochem_lab::logging;
use electrochem_lab::plotting::{export_curve, ExportFormat};
use electrochem_lab::summary::{render_table, summarize};
use std::env;
use std::process::ExitCode;
use tracing::warn;

struct Options {
    catalog: Option<String>,
    config: Option<String>,
    steps: Option<usize>,
    rest: Vec<String>,
}

fn main() -> ExitCode {
    if let Err(e) = logging::init_tracing() {
        eprintln!("warning: {}", e);
    }

    let args: Vec<String> = env::args().skip(1).collect();
    let options = match parse_options(args) {
        Ok(options) => options,
        Err(e) => {
            println!("❌ Error: {}", e);
            print_usage();
            return ExitCode::FAILURE;
        }
    };

    if options.rest.is_empty() {
        print_usage();
        return ExitCode::SUCCESS;
    }

    let engine = match build_engine(&options) {
        Ok(engine) => engine,
        Err(e) => {
            println!("❌ Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let command = options.rest[0].as_str();
    let args = &options.rest[1..];
    let outcome = match command {
        "list" => {
            list_experiments(&engine);
            Ok(())
        }
        "eval" => eval_experiment(&engine, args),
        "summary" => summary(&engine, args),
        "export" => export(&engine, args),
        _ => Err(format!("Unknown command: {}", command)),
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            println!("❌ Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn print_usage() {
    println!("\nElectrochemistry experiment calculator\n");
    println!("Usage: electrochem_lab [--catalog <file.toml>] [--config <file.toml>] [--steps <n>] <command> [args]\n");
    println!("Commands:");
    println!("  list                                 List experiments and their inputs");
    println!("  eval <id> [field=value ...]          Evaluate one experiment");
    println!("  summary [kind] [field=value ...]     Compare experiments under the same inputs");
    println!("  export <id> <csv|tsv|json> [field=value ...]   Print the sampled curve\n");
    println!("Fields not given on the command line use their form defaults.");
    println!("Example:");
    println!("  electrochem_lab eval zn-cu anodeConcentration=0.01 cathodeConcentration=1\n");
}

fn parse_options(args: Vec<String>) -> Result<Options, String> {
    let mut options = Options {
        catalog: None,
        config: None,
        steps: None,
        rest: Vec::new(),
    };
    let mut iter = args.into_iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--catalog" => options.catalog = Some(iter.next().ok_or("--catalog needs a path")?),
            "--config" => options.config = Some(iter.next().ok_or("--config needs a path")?),
            "--steps" => {
                let raw = iter.next().ok_or("--steps needs a number")?;
                let steps = raw
                    .parse::<usize>()
                    .map_err(|_| format!("invalid step count: {}", raw))?;
                options.steps = Some(steps);
            }
            _ => options.rest.push(arg),
        }
    }
    Ok(options)
}

fn build_engine(options: &Options) -> Result<Engine, String> {
    let catalog = match &options.catalog {
        Some(path) => Catalog::from_file(path).map_err(|e| e.to_string())?,
        None => BUILTIN_CATALOG.clone(),
    };
    let mut config = match &options.config {
        Some(path) => EngineConfig::from_file(path).map_err(|e| e.to_string())?,
        None => EngineConfig::default(),
    };
    if let Some(steps) = options.steps {
        config = EngineConfig::with_step_count(steps).map_err(|e| e.to_string())?;
    }
    Ok(Engine::new(catalog, config))
}

/// Form defaults overlaid with `field=value` arguments.
fn parse_inputs(args: &[String]) -> Result<InputSet, String> {
    let mut inputs = InputSet::defaults();
    for arg in args {
        let (name, raw) = arg
            .split_once('=')
            .ok_or_else(|| format!("expected field=value, got '{}'", arg))?;
        let field: InputField = name.parse()?;
        let value: f64 = raw
            .parse()
            .map_err(|_| format!("invalid number for {}: {}", name, raw))?;
        inputs.set(field, value);
    }
    Ok(inputs)
}

fn list_experiments(engine: &Engine) {
    for summary in engine.list_archetypes() {
        let fields: Vec<String> = summary
            .required_input_fields
            .iter()
            .map(|f| format!("{} [{}]", f.name(), f.unit()))
            .collect();
        println!("{:<20} {:<32} {:<13} {}", summary.id, summary.name, summary.kind, fields.join(", "));
    }
}

fn eval_experiment(engine: &Engine, args: &[String]) -> Result<(), String> {
    let id = args.first().ok_or("eval needs an experiment id")?;
    let inputs = parse_inputs(&args[1..])?;
    let evaluation = engine.evaluate(id, &inputs).map_err(|e| e.to_string())?;

    let archetype = engine.catalog().find_by_id(id).map_err(|e| e.to_string())?;
    println!("\n{}", archetype.name);
    for &field in archetype.required_input_fields() {
        if let Some(value) = inputs.get(field) {
            println!("  {}: {}", field, value);
        }
    }
    println!();
    for row in format_result(&evaluation.scalars) {
        println!("  {:<20} {}", row.label, row.value);
    }
    println!(
        "\n  Curve: {} points over {}\n",
        evaluation.curve.len(),
        evaluation.curve.axis_label
    );
    Ok(())
}

fn summary(engine: &Engine, args: &[String]) -> Result<(), String> {
    let (kind, field_args) = match args.first() {
        Some(first) if !first.contains('=') => (Some(first.parse::<KindTag>()?), &args[1..]),
        _ => (None, args),
    };
    let inputs = parse_inputs(field_args)?;
    let rows = summarize(engine, kind, &inputs);
    if rows.is_empty() {
        warn!("no experiments matched the requested kind");
    }
    print!("{}", render_table(&rows));
    Ok(())
}

fn export(engine: &Engine, args: &[String]) -> Result<(), String> {
    if args.len() < 2 {
        return Err("export needs an experiment id and a format".to_string());
    }
    let format: ExportFormat = args[1].parse()?;
    let inputs = parse_inputs(&args[2..])?;
    let evaluation = engine.evaluate(&args[0], &inputs).map_err(|e| e.to_string())?;
    let document = export_curve(&evaluation, format).map_err(|e| e.to_string())?;
    print!("{}", document);
    Ok(())
}
