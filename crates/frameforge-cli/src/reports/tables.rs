use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use frameforge_core::fps::{FpsTable, Quality, Resolution};
use frameforge_core::hardware::{Cpu, Game, Gpu};
use frameforge_core::prediction::{BottleneckInfo, Component, UpgradeSuggestion};
use strum::IntoEnumIterator;

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

fn align_right(table: &mut Table, columns: std::ops::RangeInclusive<usize>) {
    for i in columns {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }
}

fn fps_color(avg: u32) -> Color {
    match avg {
        0..=29 => Color::Red,
        30..=59 => Color::Yellow,
        _ => Color::Green,
    }
}

/// One row per quality preset, `avg / 1%` per resolution.
pub fn fps(t: &FpsTable) {
    let mut table = new_table();

    let mut header = vec![Cell::new("Preset").add_attribute(Attribute::Bold)];
    header.extend(Resolution::iter().map(|r| Cell::new(r).add_attribute(Attribute::Bold)));
    table.add_row(header);

    for q in Quality::iter() {
        let mut row = vec![Cell::new(q)];
        for r in Resolution::iter() {
            let p = t.get(r, q);
            row.push(Cell::new(format!("{} / {}", p.avg, p.low1)).fg(fps_color(p.avg)));
        }
        table.add_row(row);
    }
    align_right(&mut table, 1..=3);

    println!("\n📈 Predicted FPS (avg / 1% low)");
    println!("{}", table);
}

pub fn bottleneck(b: &BottleneckInfo) {
    let mut table = new_table();
    table.add_row(vec![
        Cell::new("Component").add_attribute(Attribute::Bold),
        Cell::new("Norm").add_attribute(Attribute::Bold),
        Cell::new(""),
    ]);

    for c in [Component::Cpu, Component::Gpu, Component::Ram] {
        let marker = if c == b.primary {
            Cell::new("◀ bottleneck").fg(Color::Red)
        } else {
            Cell::new("")
        };
        table.add_row(vec![
            Cell::new(c),
            Cell::new(format!("{:.2}", b.norm(c))),
            marker,
        ]);
    }
    align_right(&mut table, 1..=1);

    println!("\n🔍 Bottleneck: {}", b.primary);
    println!("{}", table);
}

pub fn upgrades(ups: &[UpgradeSuggestion]) {
    if ups.is_empty() {
        println!("\n✅ No upgrades would improve Ultra FPS.");
        return;
    }

    let mut table = new_table();
    table.add_row(vec![
        Cell::new("#"),
        Cell::new("Type").add_attribute(Attribute::Bold),
        Cell::new("From"),
        Cell::new("To").add_attribute(Attribute::Bold),
        Cell::new("1080p"),
        Cell::new("1440p"),
        Cell::new("4k"),
        Cell::new("Mean").add_attribute(Attribute::Bold),
    ]);

    for (i, u) in ups.iter().enumerate() {
        table.add_row(vec![
            Cell::new(i + 1),
            Cell::new(u.kind),
            Cell::new(&u.from),
            Cell::new(&u.to).add_attribute(Attribute::Bold),
            Cell::new(format!("{:+}", u.gain1080)).fg(Color::Green),
            Cell::new(format!("{:+}", u.gain1440)).fg(Color::Green),
            Cell::new(format!("{:+}", u.gain4k)).fg(Color::Green),
            Cell::new(format!("{:+.1}", u.mean_gain())).add_attribute(Attribute::Bold),
        ]);
    }
    align_right(&mut table, 4..=7);

    println!("\n🚀 Suggested Upgrades (Ultra avg gain)");
    println!("{}", table);
}

pub fn cpus(items: &[&Cpu], max_score: f64) {
    let mut table = new_table();
    table.add_row(vec![
        Cell::new("Id").add_attribute(Attribute::Bold),
        Cell::new("Name"),
        Cell::new("Score").fg(Color::Cyan),
        Cell::new("Rel"),
        Cell::new("Socket"),
        Cell::new("TDP"),
    ]);
    for c in items {
        table.add_row(vec![
            Cell::new(&c.id).add_attribute(Attribute::Bold),
            Cell::new(&c.name),
            Cell::new(format!("{:.0}", c.score)).fg(Color::Cyan),
            Cell::new(format!("{:.2}", c.score / max_score)),
            Cell::new(&c.socket),
            Cell::new(c.tdp),
        ]);
    }
    align_right(&mut table, 2..=3);
    println!("{}", table);
}

pub fn gpus(items: &[&Gpu], max_score: f64) {
    let mut table = new_table();
    table.add_row(vec![
        Cell::new("Id").add_attribute(Attribute::Bold),
        Cell::new("Name"),
        Cell::new("Score").fg(Color::Cyan),
        Cell::new("Rel"),
        Cell::new("VRAM"),
        Cell::new("TDP"),
    ]);
    for g in items {
        table.add_row(vec![
            Cell::new(&g.id).add_attribute(Attribute::Bold),
            Cell::new(&g.name),
            Cell::new(format!("{:.0}", g.score)).fg(Color::Cyan),
            Cell::new(format!("{:.2}", g.score / max_score)),
            Cell::new(format!("{}GB", g.vram)),
            Cell::new(g.tdp),
        ]);
    }
    align_right(&mut table, 2..=5);
    println!("{}", table);
}

pub fn games(rows: &[(&Game, bool)]) {
    let mut table = new_table();
    table.add_row(vec![
        Cell::new("Id").add_attribute(Attribute::Bold),
        Cell::new("Name"),
        Cell::new("Baseline"),
    ]);
    for (g, has_baseline) in rows {
        let status = if *has_baseline {
            Cell::new("yes").fg(Color::Green)
        } else {
            Cell::new("missing").fg(Color::Red)
        };
        table.add_row(vec![
            Cell::new(&g.id).add_attribute(Attribute::Bold),
            Cell::new(&g.name),
            status,
        ]);
    }
    println!("{}", table);
}
