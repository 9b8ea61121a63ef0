// src/cli.rs
//
// Scriptable front end over the same pipeline the GUI derives its grid
// from: fetch (or read the cached snapshot), filter, search, sort, page,
// print. No state survives between invocations.

use std::{ collections::BTreeSet, env, path::PathBuf };

use crate::config::options::ExportOptions;
use crate::export;
use crate::model::{ ContextId, RosterEntry, format_species };
use crate::roster::{ FilterSpec, RosterView, SortMode, SortState, StatusFilter };
use crate::session::Session;
use crate::store::{ RestStore, RosterStore, cache };
use crate::types::{ self, TypeTag };

#[derive(Clone, Debug, Default)]
struct Params {
    context: Option<ContextId>,
    list_contexts: bool,
    /// Read the on-disk snapshot instead of hitting the store.
    cached: bool,
    status: StatusFilter,
    types: BTreeSet<TypeTag>,
    search: Option<String>,
    sort: SortMode,
    /// 1-based; clamped into range later like every other page index.
    page: Option<usize>,
    page_size: Option<usize>,
    out: Option<PathBuf>,
    matchup: Option<(TypeTag, Option<TypeTag>)>,
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let params = parse_cli()?;

    if let Some((t1, t2)) = params.matchup {
        print_matchups(t1, t2);
        return Ok(());
    }

    if params.list_contexts {
        return list_contexts(&params);
    }

    list_roster(&params)
}

fn list_contexts(params: &Params) -> Result<(), Box<dyn std::error::Error>> {
    let contexts = if params.cached {
        cache::load_contexts().map_err(|e| format!("No cached context list: {}", e))?
    } else {
        let contexts = RestStore::new().contexts()?;
        let _ = cache::save_contexts(&contexts);
        contexts
    };
    for c in &contexts {
        println!("{},{}", c.id, c.name);
    }
    Ok(())
}

fn list_roster(params: &Params) -> Result<(), Box<dyn std::error::Error>> {
    let Some(context) = params.context.clone() else {
        return Err("Missing --context (try --list-contexts first)".into());
    };

    let entries = if params.cached {
        cache::load_snapshot(&context)
            .map_err(|e| format!("No cached snapshot for context {}: {}", context, e))?
    } else {
        let store = RestStore::new();
        let entries = store.fetch(&context)?;
        let _ = cache::save_snapshot(&context, &entries);
        entries
    };

    // One-shot session; the same derivation the GUI rebuilds per event.
    let mut session = Session::new();
    session.context_id = Some(context);
    session.snapshot = entries;
    session.filter = FilterSpec { status: params.status, types: params.types.clone() };
    session.query = params.search.clone().unwrap_or_default();
    session.sort = SortState { mode: params.sort, prior: SortMode::None };
    if let Some(size) = params.page_size {
        session.page.size = size;
    }
    if let Some(page) = params.page {
        session.page.index = page - 1;
    }

    let view = RosterView::build(&session);

    if let Some(out) = &params.out {
        let mut options = ExportOptions::default();
        options.set_path(&out.to_string_lossy());
        let rows: Vec<&RosterEntry> = view.ordered().collect();
        let path = export::write_export(&options, &rows)?;
        println!("Exported {} entries. {}", rows.len(), path.display());
        return Ok(());
    }

    let paged = params.page.is_some() || params.page_size.is_some();
    if paged {
        for e in view.visible() {
            print_row(e);
        }
        let page = view.page();
        println!("Page {}/{} ({} matching)", page.index + 1, page.total_pages, view.total());
    } else {
        for e in view.ordered() {
            print_row(e);
        }
        println!("{} matching", view.total());
    }
    Ok(())
}

fn print_row(e: &RosterEntry) {
    let types = match (e.type1, e.type2) {
        (Some(a), Some(b)) => join!(a.label(), "/", b.label()),
        (Some(a), None) => s!(a.label()),
        (None, Some(b)) => s!(b.label()),
        (None, None) => s!("-"),
    };
    let status = if e.is_active { "active" } else { "benched" };
    println!(
        "{}\t{}\t{}\t{}\t{}",
        e.id,
        e.display_name(),
        format_species(&e.species),
        types,
        status
    );
}

fn print_matchups(t1: TypeTag, t2: Option<TypeTag>) {
    match t2 {
        Some(b) => println!("Defender: {} / {}", t1.label(), b.label()),
        None => println!("Defender: {}", t1.label()),
    }

    let m = types::matchups(Some(t1), t2);
    if m.is_empty() {
        println!("No notable matchups");
        return;
    }
    print_mult_list("Weak to", &m.weaknesses);
    print_mult_list("Resists", &m.resistances);
    if !m.immunities.is_empty() {
        let names: Vec<&str> = m.immunities.iter().map(|(t, _)| t.label()).collect();
        println!("No effect: {}", names.join(", "));
    }
}

fn print_mult_list(label: &str, list: &[(TypeTag, f32)]) {
    if list.is_empty() {
        return;
    }
    let parts: Vec<String> = list
        .iter()
        .map(|(t, m)| join!(t.label(), " ", &fmt_mult(*m)))
        .collect();
    println!("{}: {}", label, parts.join(", "));
}

// Combined multipliers are only ever 0.25, 0.5, 2 or 4 here.
fn fmt_mult(m: f32) -> String {
    if m == m.trunc() {
        format!("x{}", m as u32)
    } else {
        format!("x{}", m)
    }
}

fn parse_cli() -> Result<Params, Box<dyn std::error::Error>> {
    let mut params = Params::default();
    let mut args = env::args().skip(1);
    while let Some(a) = args.next() {
        match a.as_str()
        {
            "--list-contexts" => params.list_contexts = true,
            "--cached" => params.cached = true,
            "-c" | "--context" => {
                let v = args.next().ok_or("Missing context id")?;
                params.context = Some(ContextId::new(v));}
            "--status" => {
                let v = args.next().ok_or("Missing value for --status")?;
                params.status = match v.to_ascii_lowercase().as_str() {
                    "all" => StatusFilter::All,
                    "active" => StatusFilter::Active,
                    "benched" => StatusFilter::Benched,
                    other => return Err(format!("Unknown status: {}", other).into()),
                };}
            "--types" => {
                let v = args.next().ok_or("Missing value for --types")?;
                params.types = parse_type_list(&v)?;}
            "-s" | "--search" => {
                params.search = Some(args.next().ok_or("Missing search text")?);}
            "--sort" => {
                let v = args.next().ok_or("Missing value for --sort")?;
                params.sort = match v.to_ascii_lowercase().as_str() {
                    "none" => SortMode::None,
                    "recent" => SortMode::RecentFirst,
                    "alpha" => SortMode::AlphaAscending,
                    "alpha-desc" => SortMode::AlphaDescending,
                    other => return Err(format!("Unknown sort: {}", other).into()),
                };}
            "--page" => {
                let v: usize = args.next().ok_or("Missing value for --page")?.parse()?;
                if v == 0 { return Err("Page numbers start at 1".into()); }
                params.page = Some(v);}
            "--page-size" => {
                let v: usize = args.next().ok_or("Missing value for --page-size")?.parse()?;
                if v == 0 { return Err("Page size must be at least 1".into()); }
                params.page_size = Some(v);}
            "-o" | "--out" => {
                params.out = Some(PathBuf::from(args.next().ok_or("Missing output path")?));}
            "--matchup" => {
                let v = args.next().ok_or("Missing value for --matchup")?;
                params.matchup = Some(parse_matchup(&v)?);}
            "-h" | "--help" => {
                eprintln!(include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            _ => return Err(format!("Unknown arg: {}", a).into()),
        }
    }

    Ok(params)
}

fn parse_type_list(s: &str) -> Result<BTreeSet<TypeTag>, Box<dyn std::error::Error>> {
    let mut out = BTreeSet::new();
    for part in s.split(',') {
        let part = part.trim();
        if part.is_empty() { continue; }
        let tag = TypeTag::parse(part).ok_or(format!("Unknown type: {}", part))?;
        out.insert(tag);
    }
    Ok(out)
}

fn parse_matchup(s: &str) -> Result<(TypeTag, Option<TypeTag>), Box<dyn std::error::Error>> {
    let parts: Vec<&str> = s.split(',').map(str::trim).filter(|p| !p.is_empty()).collect();
    match parts.as_slice() {
        [one] => {
            let t1 = TypeTag::parse(one).ok_or(format!("Unknown type: {}", one))?;
            Ok((t1, None))
        }
        [one, two] => {
            let t1 = TypeTag::parse(one).ok_or(format!("Unknown type: {}", one))?;
            let t2 = TypeTag::parse(two).ok_or(format!("Unknown type: {}", two))?;
            Ok((t1, Some(t2)))
        }
        _ => Err("A defender has at most two types".into()),
    }
}
