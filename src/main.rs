use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use condition_axis::aspect_ratios::{self, DimensionDefaults};
use condition_axis::{ConditionData, ConditionEngine, ConditionType, Family, FamilyConditions};

#[derive(Parser, Debug)]
#[command(name = "condition_axis")]
#[command(about = "Generate weighted character, facial and occupation conditions for prompts")]
struct Args {
    /// Condition type: None, Character, Facial, Occupation, Both, All
    #[arg(short, long, default_value = "Character")]
    kind: String,

    /// Random seed (uses random seed if not specified)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Number of conditions to print (line i uses seed + i)
    #[arg(short = 'n', long, default_value = "1")]
    count: u64,

    /// Directory with character.json / facial.json / occupation.json overrides
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Print each family's structured condition as JSON
    #[arg(long)]
    json: bool,

    /// List axes and values for a family, then exit
    #[arg(long)]
    list_axes: Option<String>,

    /// Print a family's configuration as JSON (data-dir file format), then exit
    #[arg(long)]
    dump_family: Option<String>,

    /// List aspect ratio presets, then exit
    #[arg(long)]
    list_presets: bool,

    /// Print dimensions for an aspect ratio preset, then exit
    #[arg(long)]
    preset: Option<String>,

    /// Validate WIDTHxHEIGHT for image generation, then exit
    #[arg(long)]
    check: Option<String>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "condition_axis=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();

    if args.list_presets {
        for preset in aspect_ratios::PRESETS {
            match preset.dimensions() {
                Some((w, h)) => {
                    println!("{:<28} {:>4}x{:<4} {}", preset.name, w, h, preset.description)
                }
                None => println!("{:<28} {:>9} {}", preset.name, "-", preset.description),
            }
        }
        return Ok(());
    }

    if let Some(name) = &args.preset {
        let (w, h) = aspect_ratios::dimensions(name, DimensionDefaults::default())?;
        println!("{}x{} ({})", w, h, aspect_ratios::calculate_aspect_ratio(w, h));
        return Ok(());
    }

    if let Some(dims) = &args.check {
        let (w, h) = parse_dimensions(dims)?;
        aspect_ratios::validate_dimensions(w, h)?;
        match aspect_ratios::find_preset_for_dimensions(w, h) {
            Some(preset) => println!("{}x{} ok ({})", w, h, preset.name),
            None => println!("{}x{} ok ({})", w, h, aspect_ratios::calculate_aspect_ratio(w, h)),
        }
        return Ok(());
    }

    let data = match &args.data_dir {
        Some(dir) => ConditionData::load_from(dir)
            .with_context(|| format!("loading condition data from {}", dir.display()))?,
        None => ConditionData::defaults()?,
    };

    if let Some(name) = &args.list_axes {
        let system = data.family(parse_family(name)?);
        let policy = system.policy();
        for axis in system.axis_names() {
            let role = if policy.is_mandatory(axis) {
                "mandatory"
            } else if policy.is_optional(axis) {
                "optional"
            } else {
                "unused"
            };
            println!("{} ({}): {}", axis, role, system.axis_values(axis)?.join(", "));
        }
        println!("max optional: {}", policy.max_optional);
        return Ok(());
    }

    if let Some(name) = &args.dump_family {
        let system = data.family(parse_family(name)?);
        println!("{}", serde_json::to_string_pretty(&system.to_file())?);
        return Ok(());
    }

    let Some(kind) = ConditionType::from_label(&args.kind) else {
        bail!(
            "unknown condition type '{}' (expected one of: {})",
            args.kind,
            ConditionType::all()
                .iter()
                .map(|t| t.label())
                .collect::<Vec<_>>()
                .join(", ")
        );
    };

    let mut engine = ConditionEngine::new(data);
    for i in 0..args.count {
        let seed = args.seed.map(|s| s.wrapping_add(i));
        if args.json {
            let conditions = engine.generate_conditions(kind, seed)?;
            println!("{}", serde_json::to_string(&FamilyConditions(&conditions))?);
        } else {
            println!("{}", engine.generate_by_type(kind, seed)?);
        }
    }

    Ok(())
}

fn parse_family(name: &str) -> anyhow::Result<Family> {
    Family::from_name(name).with_context(|| {
        format!(
            "unknown family '{}' (expected one of: {})",
            name,
            Family::all()
                .iter()
                .map(|f| f.name())
                .collect::<Vec<_>>()
                .join(", ")
        )
    })
}

fn parse_dimensions(dims: &str) -> anyhow::Result<(u32, u32)> {
    let (w, h) = dims
        .split_once(['x', 'X'])
        .with_context(|| format!("expected WIDTHxHEIGHT, got '{}'", dims))?;
    Ok((
        w.trim()
            .parse()
            .with_context(|| format!("invalid width '{}'", w))?,
        h.trim()
            .parse()
            .with_context(|| format!("invalid height '{}'", h))?,
    ))
}
