use std::error::Error;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::time::Instant;

use centree::{ClosureMode, DynIntervalTree};

use clap::{Arg, Command};
use fnv::FnvHashMap;

type GenericError = Box<dyn Error>;

// Split a tab separated line into its first `n` fields.
fn fields(line: &str, n: usize) -> Result<Vec<&str>, GenericError> {
    let fields: Vec<&str> = line.trim_end().splitn(n + 1, '\t').take(n).collect();
    if fields.len() < n {
        return Err(format!("expected {} tab separated fields: {:?}", n, line).into());
    }
    Ok(fields)
}

// Read a bed file into one tree per sequence name. Positions reported by a
// tree are line numbers within that sequence.
fn read_bed_file(
    path: &str,
    closed: ClosureMode,
    leaf_size: usize,
) -> Result<FnvHashMap<String, DynIntervalTree<i64>>, GenericError> {
    let mut bounds = FnvHashMap::<String, (Vec<i64>, Vec<i64>)>::default();

    let now = Instant::now();

    let rdr = BufReader::new(File::open(path)?);
    let mut line_count = 0;
    for line in rdr.lines() {
        let line = line?;
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let f = fields(&line, 3)?;
        let (left, right) = bounds.entry(f[0].to_string()).or_default();
        left.push(f[1].parse()?);
        right.push(f[2].parse()?);
        line_count += 1;
    }

    eprintln!("reading bed: {}s", now.elapsed().as_millis() as f64 / 1000.0);
    eprintln!("lines: {}", line_count);
    eprintln!("sequences: {}", bounds.len());

    let now = Instant::now();
    let mut trees = FnvHashMap::<String, DynIntervalTree<i64>>::default();
    for (seqname, (left, right)) in bounds {
        trees.insert(
            seqname,
            DynIntervalTree::with_leaf_size(left, right, closed, leaf_size)?,
        );
    }
    eprintln!("building trees: {}s", now.elapsed().as_millis() as f64 / 1000.0);

    Ok(trees)
}

fn query_points(
    intervals_path: &str,
    points_path: &str,
    closed: ClosureMode,
    leaf_size: usize,
) -> Result<(), GenericError> {
    let trees = read_bed_file(intervals_path, closed, leaf_size)?;

    let rdr = BufReader::new(File::open(points_path)?);
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    let mut total_count: usize = 0;
    let mut hits = Vec::new();
    let now = Instant::now();

    for line in rdr.lines() {
        let line = line?;
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let f = fields(&line, 2)?;
        let point: i64 = f[1].parse()?;

        hits.clear();
        if let Some(tree) = trees.get(f[0]) {
            tree.query(&mut hits, point);
        }
        hits.sort_unstable();

        let positions: Vec<String> = hits.iter().map(|h| h.to_string()).collect();
        writeln!(out, "{}\t{}\t{}", line, hits.len(), positions.join(","))?;
        total_count += hits.len();
    }
    out.flush()?;

    eprintln!("lookup: {}s", now.elapsed().as_millis() as f64 / 1000.0);
    eprintln!("total matches: {}", total_count);

    Ok(())
}

fn main() {
    let matches = Command::new("point-lookup")
        .about("Find the intervals containing each of a list of positions")
        .arg(
            Arg::new("intervals")
                .help("intervals to index (seqname, left, right)")
                .value_name("intervals.bed")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("points")
                .help("query positions (seqname, position)")
                .value_name("points.tsv")
                .required(true)
                .index(2),
        )
        .arg(
            Arg::new("closed")
                .long("closed")
                .short('c')
                .takes_value(true)
                .possible_values(["left", "right", "both", "neither"])
                .default_value(ClosureMode::default().as_str())
                .help("which interval endpoints are inclusive"),
        )
        .arg(
            Arg::new("leaf_size")
                .long("leaf-size")
                .short('l')
                .takes_value(true)
                .default_value("100")
                .help("interval count below which nodes are searched linearly"),
        )
        .get_matches();

    let input1 = matches.value_of("intervals").unwrap();
    let input2 = matches.value_of("points").unwrap();

    let result = matches
        .value_of("closed")
        .unwrap()
        .parse::<ClosureMode>()
        .map_err(GenericError::from)
        .and_then(|closed| {
            let leaf_size: usize = matches.value_of("leaf_size").unwrap().parse()?;
            query_points(input1, input2, closed, leaf_size)
        });

    if let Err(err) = result {
        eprintln!("error: {}", err);
        std::process::exit(1);
    }
}
