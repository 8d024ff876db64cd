use std::collections::HashSet;

use itertools::Itertools;

use crate::{
    constants::{HOT_ROUTE_LENGTH, MAX_POOL_POINTS_PER_BLOCK, MAX_POOL_POINTS_PER_TX, NATIVE_DENOM},
    error::ValidationError,
    types::{BaseDenom, InfoByPoolType, Route, TokenPairArbRoutes},
};

pub fn validate_base_denoms(base_denoms: &[BaseDenom]) -> Result<(), ValidationError> {
    let first = base_denoms
        .first()
        .ok_or(ValidationError::EmptyBaseDenoms {})?;

    if first.denom != NATIVE_DENOM {
        return Err(ValidationError::InvalidFirstBaseDenom {
            expected: NATIVE_DENOM.to_string(),
            found: first.denom.clone(),
        });
    }

    let mut seen = HashSet::new();
    for base_denom in base_denoms {
        if base_denom.denom.is_empty() {
            return Err(ValidationError::EmptyDenom {});
        }
        if base_denom.step_size.is_zero() {
            return Err(ValidationError::InvalidStepSize(base_denom.denom.clone()));
        }
        if !seen.insert(base_denom.denom.as_str()) {
            return Err(ValidationError::DuplicateBaseDenom(base_denom.denom.clone()));
        }
    }

    Ok(())
}

/// Validates a full hot route submission. The first failure rejects everything.
pub fn validate_hot_routes(
    hot_routes: &[TokenPairArbRoutes],
    base_denoms: &[BaseDenom],
) -> Result<(), ValidationError> {
    let mut token_pairs = HashSet::new();

    for token_pair in hot_routes {
        if token_pair.token_in.is_empty() || token_pair.token_out.is_empty() {
            return Err(ValidationError::EmptyDenom {});
        }

        if !token_pairs.insert((token_pair.token_in.as_str(), token_pair.token_out.as_str())) {
            return Err(ValidationError::DuplicateTokenPair {
                token_in: token_pair.token_in.clone(),
                token_out: token_pair.token_out.clone(),
            });
        }

        if token_pair.arb_routes.is_empty() {
            return Err(ValidationError::EmptyRoutes {
                token_in: token_pair.token_in.clone(),
                token_out: token_pair.token_out.clone(),
            });
        }

        for route in &token_pair.arb_routes {
            validate_route(route, base_denoms)?;
        }
    }

    Ok(())
}

pub fn validate_route(route: &Route, base_denoms: &[BaseDenom]) -> Result<(), ValidationError> {
    let trades = &route.trades;

    if trades.len() != HOT_ROUTE_LENGTH {
        return Err(ValidationError::InvalidTradeCount {
            expected: HOT_ROUTE_LENGTH,
            found: trades.len(),
        });
    }

    let placeholders = trades.iter().filter(|trade| trade.is_placeholder()).count();
    if placeholders != 1 {
        return Err(ValidationError::InvalidPlaceholderCount(placeholders));
    }

    if trades
        .iter()
        .any(|trade| trade.token_in.is_empty() || trade.token_out.is_empty())
    {
        return Err(ValidationError::EmptyDenom {});
    }

    for (index, (previous, next)) in trades.iter().tuple_windows().enumerate() {
        if previous.token_out != next.token_in {
            return Err(ValidationError::DenomDiscontinuity { index: index + 1 });
        }
    }

    // length was checked above
    let entry_denom = &trades[0].token_in;
    if trades[HOT_ROUTE_LENGTH - 1].token_out != *entry_denom {
        return Err(ValidationError::RouteNotClosed(entry_denom.clone()));
    }

    if let Some(pool) = trades
        .iter()
        .filter(|trade| !trade.is_placeholder())
        .map(|trade| trade.pool)
        .duplicates()
        .next()
    {
        return Err(ValidationError::DuplicatePool(pool));
    }

    if route.step_size.is_zero() {
        return Err(ValidationError::InvalidStepSize(entry_denom.clone()));
    }

    if !base_denoms
        .iter()
        .any(|base_denom| base_denom.denom == *entry_denom)
    {
        return Err(ValidationError::NonBaseDenomStart(entry_denom.clone()));
    }

    Ok(())
}

pub fn validate_max_pool_points(
    max_pool_points_per_tx: u64,
    max_pool_points_per_block: u64,
) -> Result<(), ValidationError> {
    if max_pool_points_per_tx == 0 || max_pool_points_per_tx > MAX_POOL_POINTS_PER_TX {
        return Err(ValidationError::MaxPoolPointsPerTxOutOfRange {
            value: max_pool_points_per_tx,
            max: MAX_POOL_POINTS_PER_TX,
        });
    }

    if max_pool_points_per_block == 0 || max_pool_points_per_block > MAX_POOL_POINTS_PER_BLOCK {
        return Err(ValidationError::MaxPoolPointsPerBlockOutOfRange {
            value: max_pool_points_per_block,
            max: MAX_POOL_POINTS_PER_BLOCK,
        });
    }

    if max_pool_points_per_tx > max_pool_points_per_block {
        return Err(ValidationError::TxPointsExceedBlockPoints {
            tx: max_pool_points_per_tx,
            block: max_pool_points_per_block,
        });
    }

    Ok(())
}

pub fn validate_info_by_pool_type(info: &InfoByPoolType) -> Result<(), ValidationError> {
    if info.balancer.weight == 0 {
        return Err(ValidationError::ZeroPoolWeight("balancer".to_string()));
    }
    if info.stable.weight == 0 {
        return Err(ValidationError::ZeroPoolWeight("stable".to_string()));
    }
    if info.concentrated.weight == 0 {
        return Err(ValidationError::ZeroPoolWeight("concentrated".to_string()));
    }

    let mut contracts = HashSet::new();
    for weight_map in &info.cosmwasm.weight_maps {
        if weight_map.weight == 0 {
            return Err(ValidationError::ZeroPoolWeight(
                weight_map.contract_address.clone(),
            ));
        }
        if !contracts.insert(weight_map.contract_address.as_str()) {
            return Err(ValidationError::DuplicateWeightMap(
                weight_map.contract_address.clone(),
            ));
        }
    }

    Ok(())
}
