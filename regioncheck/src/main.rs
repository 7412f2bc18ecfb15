use common::config::{load_config, OutputFormat};
use common::logger::RegionLog;
use common::saveload::load_json_path;
use common::unwrap_or;
use geom::Point;
use std::path::PathBuf;
use std::process::exit;
use structopt::StructOpt;

mod check;

use check::{
    collect_queries, describe_config, output_format, render_text, summary, verdicts, Regions,
};

#[derive(StructOpt, Debug)]
#[structopt(name = "regioncheck", about = "Tells whether points lie inside polygonal regions")]
struct Opt {
    /// JSON object mapping region names to their vertex lists
    #[structopt(parse(from_os_str))]
    regions: PathBuf,

    /// Query point as `x,y`, can be repeated
    #[structopt(long = "point", number_of_values = 1, allow_hyphen_values = true)]
    points: Vec<String>,

    /// JSON array of `[x, y]` query points
    #[structopt(long, parse(from_os_str))]
    queries: Option<PathBuf>,

    /// Config file, defaults are used when it is missing
    #[structopt(long, parse(from_os_str), default_value = "regioncheck.json")]
    config: PathBuf,

    /// Print the verdicts as JSON
    #[structopt(long)]
    json: bool,
}

fn main() {
    let opt: Opt = Opt::from_args();

    let (config, status) = load_config(&opt.config);
    RegionLog::init(&config.log);

    let (level, msg) = describe_config(&opt.config, &status);
    log::log!(level, "{}", msg);

    let regions: Regions = unwrap_or!(load_json_path(&opt.regions), exit(1));
    log::info!("loaded {} regions", regions.len());

    let file_name = opt.queries.as_ref().map(|path| path.display().to_string());
    let from_file: Option<Vec<Point>> = match opt.queries {
        Some(ref path) => Some(unwrap_or!(load_json_path(path), exit(1))),
        None => None,
    };

    let queries = match collect_queries(
        &regions,
        &opt.points,
        file_name.as_deref().zip(from_file),
    ) {
        Ok(q) => q,
        Err(e) => {
            log::error!("invalid input:\n{}", e);
            exit(1);
        }
    };

    if queries.is_empty() {
        log::warn!("no query points given, printing region summaries");
        for (name, region) in &regions {
            println!("{}", summary(name, region));
        }
        return;
    }

    let v = verdicts(&regions, &queries);

    match output_format(opt.json, &config) {
        OutputFormat::Text => print!("{}", render_text(&v)),
        OutputFormat::Json => match serde_json::to_string_pretty(&v) {
            Ok(s) => println!("{}", s),
            Err(e) => {
                log::error!("failed serializing verdicts: {}", e);
                exit(1);
            }
        },
    }

    log::debug!(
        "{} of {} checks inside",
        v.iter().filter(|v| v.inside).count(),
        v.len()
    );
}
