// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use chrono::{DateTime, Utc};
use rota_alloc_model::prelude::{
    project, Model, PersonIdentifier, RepeatPolicy, Room, RoomIdentifier, Scenario,
    ScenarioBuilder, ScheduleReport,
};
use rota_alloc_solver::prelude::{MilpBackend, SolveLimits, SolveOutcome, SolverBackend};
use serde::Serialize;
use std::io::Write;
use std::process::ExitCode;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

/// Display names live only in this driver; the core works on indices.
const ROOM_NAMES: [&str; 6] = [
    "Kitchen1",
    "Kitchen2",
    "Living Room",
    "Hallway",
    "Bathroom1",
    "Bathroom2",
];
const PERSON_NAMES: [&str; 6] = ["Name1", "Name2", "Name3", "Name4", "Name5", "Name6"];

fn enable_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}

/// The household instance: six rooms, six people, a sixteen-week cycle.
/// The two bathrooms are split between fixed sub-groups, everyone starts
/// from the agreed week-zero layout, short-range repeats are banned and
/// longer ones are penalized less the closer they sit to the six-week
/// anchor.
fn household_scenario() -> Result<Scenario, Box<dyn std::error::Error>> {
    let rid = RoomIdentifier::new;
    let pid = PersonIdentifier::new;
    let scenario = ScenarioBuilder::new()
        .with_rooms([
            Room::open(rid(0)),
            Room::open(rid(1)),
            Room::open(rid(2)),
            Room::open(rid(3)),
            Room::restricted(rid(4), [pid(0), pid(1), pid(2), pid(3)]),
            Room::restricted(rid(5), [pid(4), pid(5)]),
        ])
        .with_person_count(6)
        .with_cycle_length(16)
        .with_opening_assignment([
            (rid(0), pid(3)),
            (rid(1), pid(1)),
            (rid(2), pid(2)),
            (rid(3), pid(4)),
            (rid(4), pid(0)),
            (rid(5), pid(5)),
        ])
        .with_policy(RepeatPolicy::distance_decayed(16, 6, 4))
        .build()?;
    Ok(scenario)
}

fn room_name(room: RoomIdentifier) -> &'static str {
    ROOM_NAMES
        .get(*room.value() as usize)
        .copied()
        .unwrap_or("?")
}

fn person_name(person: PersonIdentifier) -> &'static str {
    PERSON_NAMES
        .get(*person.value() as usize)
        .copied()
        .unwrap_or("?")
}

fn print_schedule(scenario: &Scenario, report: &ScheduleReport) {
    let width = ROOM_NAMES
        .iter()
        .chain(PERSON_NAMES.iter())
        .map(|n| n.len())
        .max()
        .unwrap_or(8);

    print!("{:>5}", "Week");
    for room in scenario.rooms().iter_ids() {
        print!("  {:>width$}", room_name(room));
    }
    println!();

    for week in 0..scenario.cycle_length() as usize {
        print!("{:>5}", week);
        for room in scenario.rooms().iter_ids() {
            let name = report
                .room_sequence(room)
                .and_then(|seq| seq.get(week))
                .map(|p| person_name(*p))
                .unwrap_or("?");
            print!("  {:>width$}", name);
        }
        println!();
    }

    println!();
    for (person, total) in report.iter_person_totals() {
        println!("{} is on duty {} weeks", person_name(person), total);
    }

    println!();
    for ((room, person), count) in report.iter_pair_counts() {
        println!(
            "{} is covered by {} in {} of {} weeks",
            room_name(room),
            person_name(person),
            count,
            scenario.cycle_length()
        );
    }
}

#[derive(Serialize)]
struct RunRecord {
    start_ts: DateTime<Utc>,
    end_ts: DateTime<Utc>,
    runtime_ms: u128,
    status: String,
    objective: Option<i64>,
}

fn write_run_record(record: &RunRecord) -> Result<(), Box<dyn std::error::Error>> {
    let mut file = std::fs::File::create("rota_run.json")?;
    file.write_all(serde_json::to_string_pretty(record)?.as_bytes())?;
    Ok(())
}

fn run() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let scenario = household_scenario()?;
    tracing::info!(
        "Solving a {}-week rotation over {} rooms and {} persons",
        scenario.cycle_length(),
        scenario.room_count(),
        scenario.person_count()
    );

    let model = Model::from_scenario(&scenario)?;
    tracing::info!(
        variables = model.variables().len(),
        constraints = model.constraints().len(),
        "model encoded"
    );

    let start_ts = Utc::now();
    let t0 = Instant::now();
    let outcome = MilpBackend::new().solve(&model, &SolveLimits::none())?;
    let runtime = t0.elapsed();
    tracing::info!("solved in {:.3} s: {}", runtime.as_secs_f64(), outcome);

    let record = RunRecord {
        start_ts,
        end_ts: Utc::now(),
        runtime_ms: runtime.as_millis(),
        status: match &outcome {
            SolveOutcome::Optimal { .. } => "optimal".into(),
            SolveOutcome::Feasible { .. } => "feasible".into(),
            SolveOutcome::Infeasible => "infeasible".into(),
        },
        objective: outcome.objective(),
    };
    write_run_record(&record)?;

    match &outcome {
        SolveOutcome::Infeasible => {
            // A valid answer, not a crash: the rules admit no rotation.
            println!("No rotation satisfies the configured rules.");
            Ok(ExitCode::SUCCESS)
        }
        SolveOutcome::Optimal { valuation, .. }
        | SolveOutcome::Feasible { valuation, .. } => {
            let report = project(&scenario, valuation)?;
            println!("Result: {outcome}");
            println!();
            print_schedule(&scenario, &report);
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn main() -> ExitCode {
    enable_tracing();
    match run() {
        Ok(code) => code,
        Err(error) => {
            tracing::error!("{error}");
            ExitCode::FAILURE
        }
    }
}
