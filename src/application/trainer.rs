// Model training - per-target least-squares fit with a held-out split
use crate::domain::model::{RouteModel, TargetFit};
use crate::domain::route::SampleRow;
use linfa::prelude::*;
use linfa_linear::LinearRegression;
use ndarray::{Array1, Array2};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use thiserror::Error;

const SPLIT_SEED: u64 = 42;
const TRAIN_RATIO: f64 = 0.8;
/// Fewest rows that still leave both partitions non-empty.
const MIN_ROWS: usize = 5;

#[derive(Debug, Error)]
pub enum TrainError {
    #[error("dataset is empty")]
    EmptyDataset,
    #[error("dataset has only {0} rows, need at least {MIN_ROWS}")]
    TooFewRows(usize),
    #[error("failed to fit {target}: {message}")]
    Fit {
        target: &'static str,
        message: String,
    },
}

#[derive(Debug, Clone, Copy)]
pub struct TargetReport {
    pub name: &'static str,
    pub held_out_mae: f64,
}

#[derive(Debug, Clone)]
pub struct TrainedModel {
    pub model: RouteModel,
    pub validation: Vec<TargetReport>,
}

/// Deterministic shuffle + 80/20 split, then one least-squares fit per
/// target. Training is a one-shot batch operation; any invalid input aborts.
pub fn fit(rows: &[SampleRow]) -> Result<TrainedModel, TrainError> {
    if rows.is_empty() {
        return Err(TrainError::EmptyDataset);
    }
    if rows.len() < MIN_ROWS {
        return Err(TrainError::TooFewRows(rows.len()));
    }

    let mut indices: Vec<usize> = (0..rows.len()).collect();
    let mut rng = StdRng::seed_from_u64(SPLIT_SEED);
    indices.shuffle(&mut rng);

    let train_len = ((rows.len() as f64) * TRAIN_RATIO).round() as usize;
    let train_len = train_len.clamp(1, rows.len() - 1);
    let (train_idx, held_out_idx) = indices.split_at(train_len);

    let mut train_x = Array2::zeros((train_idx.len(), 4));
    for (i, &row) in train_idx.iter().enumerate() {
        for (j, value) in rows[row].features().iter().enumerate() {
            train_x[[i, j]] = *value;
        }
    }

    let held_out: Vec<([f64; 4], [f64; 3])> = held_out_idx
        .iter()
        .map(|&row| (rows[row].features(), rows[row].targets()))
        .collect();

    let fit_target = |index: usize, name: &'static str| -> Result<(TargetFit, TargetReport), TrainError> {
        let train_y = Array1::from_iter(train_idx.iter().map(|&row| rows[row].targets()[index]));
        let dataset = Dataset::new(train_x.clone(), train_y);
        let fitted = LinearRegression::new()
            .fit(&dataset)
            .map_err(|err| TrainError::Fit {
                target: name,
                message: err.to_string(),
            })?;

        let target = TargetFit {
            name: name.to_string(),
            coefficients: fitted.params().iter().copied().collect(),
            intercept: fitted.intercept(),
        };

        let held_out_mae = held_out
            .iter()
            .map(|(features, labels)| (target.predict(features) - labels[index]).abs())
            .sum::<f64>()
            / held_out.len() as f64;

        tracing::info!(label = name, held_out_mae, "fitted target");
        Ok((target, TargetReport { name, held_out_mae }))
    };

    let (shortest_eta_min, shortest_report) = fit_target(0, "shortest_eta_min")?;
    let (ev_route_eta_min, ev_eta_report) = fit_target(1, "ev_route_eta_min")?;
    let (ev_route_distance_km, ev_dist_report) = fit_target(2, "ev_route_distance_km")?;

    Ok(TrainedModel {
        model: RouteModel {
            shortest_eta_min,
            ev_route_eta_min,
            ev_route_distance_km,
        },
        validation: vec![shortest_report, ev_eta_report, ev_dist_report],
    })
}
