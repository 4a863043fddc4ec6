use prettytable::{ Table, row::Row, cell::Cell };
use rayon::prelude::*;
use bnet::prelude::*;
use errors::*;
use helper::QueryArgs;
use input::BatchInput;

/// Render a factor as a table: one column per variable, plus the weight
pub fn factor_table(factor: &Factor, settings: &Settings) -> Table {
    let conf = &settings.display;
    let mut table = Table::new();

    let mut titles: Vec<Cell> = factor.variables().iter().map(|v| Cell::new(v)).collect();
    titles.push(Cell::new("P"));
    table.set_titles(Row::new(titles));

    for &(ref assignment, weight) in factor.entries() {
        let mut cells: Vec<Cell> = factor.variables().iter().zip(assignment.iter())
            .map(|(var, &val)| {
                if val {
                    Cell::new(var)
                } else {
                    Cell::new(&format!("{}{}", conf.negation_marker, var))
                }
            })
            .collect();
        cells.push(Cell::new(&format_significant(weight, conf.significant_digits)));
        table.add_row(Row::new(cells));
    }

    table
}

pub fn print_factor(title: &str, factor: &Factor, settings: &Settings) {
    println!("{}", title);
    factor_table(factor, settings).printstd();
}

pub fn show(network: &BayesNetwork, settings: &Settings) -> Result<()> {
    for node in network.nodes() {
        let title = if node.parents().is_empty() {
            format!("P({})", node.name())
        } else {
            format!("P({} | {})", node.name(), node.parents().join(", "))
        };
        print_factor(&title, &node.factor()?, settings);
    }
    Ok(())
}

/// Answer one query. An explicit order eliminates exactly those variables, otherwise every
/// variable that is neither queried nor observed is eliminated in order of appearance.
pub fn run_query(factors: &[Factor], settings: &Settings, args: &QueryArgs) -> Result<Factor> {
    let query_vars = args.query_refs();
    let evidence = args.evidence_refs();
    if query_vars.is_empty() {
        bail!("No query variable provided");
    }

    let engine: Box<dyn Inference> = if args.brute_force {
        Box::new(BruteForce::new(settings.inference.clone()))
    } else {
        Box::new(VariableElimination::new(settings.inference.clone()))
    };

    let result = match args.order {
        Some(ref order) => {
            let hidden: Vec<&str> = order.iter().map(|v| v.as_str()).collect();
            let result = engine.infer(factors, &hidden, &evidence)?;
            // the order must cover every variable that is not queried
            if result.variables().len() != query_vars.len() || query_vars.iter().any(|v| !result.contains(v)) {
                bail!("Elimination order leaves {:?} but the query is {:?}", result.variables(), query_vars);
            }
            result.reorder(&query_vars)?
        },
        None => query(engine.as_ref(), factors, &query_vars, &evidence)?
    };

    debug!("{} =\n{}", args.describe(), result.display(&settings.display));
    Ok(result)
}

/// Answer every query of the batch in parallel, then print the answers in input order
pub fn run_batch(network: &BayesNetwork, settings: &Settings, batch: &BatchInput) -> Result<()> {
    let factors = network.factors()?;
    let queries = batch.queries.iter()
        .map(|q| q.to_args())
        .collect::<Result<Vec<QueryArgs>>>()?;

    let results: Vec<Result<Factor>> = queries.par_iter()
        .map(|args| run_query(&factors, settings, args))
        .collect();

    for (args, result) in queries.iter().zip(results.into_iter()) {
        let result = result.chain_err(|| format!("Cannot answer {}", args.describe()))?;
        print_factor(&args.describe(), &result, settings);
    }

    Ok(())
}
