use maze_core::{Agent, CoreError, Instance, Pos, WallGrid, N};

use crate::error::ParseError;

/// Parses the whitespace-separated stdin contract (spec §6) into an
/// `Instance`. Whitespace (including newlines) is insignificant; tokens are
/// read in the documented order.
pub fn parse_instance(input: &str) -> Result<Instance, ParseError> {
    let mut tokens = input.split_ascii_whitespace();

    let n = next_int(&mut tokens, "grid size N")? as usize;
    if n != N {
        return Err(ParseError::WrongGridSize { expected: N, actual: n });
    }
    let k = next_int(&mut tokens, "agent count K")? as usize;
    if k == 0 || k > maze_core::MAX_K {
        return Err(ParseError::BadAgentCount { actual: k, max: maze_core::MAX_K });
    }

    let mut agents = Vec::with_capacity(k);
    for _ in 0..k {
        let sy = next_coord(&mut tokens, "agent src row")?;
        let sx = next_coord(&mut tokens, "agent src col")?;
        let dy = next_coord(&mut tokens, "agent dst row")?;
        let dx = next_coord(&mut tokens, "agent dst col")?;
        agents.push(Agent::new(Pos::new(sy, sx), Pos::new(dy, dx)));
    }

    let mut owallv = vec![vec![false; N + 1]; N];
    for r in 0..N {
        let row = next_token(&mut tokens, "vertical wall row")?;
        let bits = parse_wall_row(row, N - 1)?;
        owallv[r][1..N].copy_from_slice(&bits);
    }

    let mut owallh = vec![vec![false; N]; N + 1];
    for r in 1..N {
        let row = next_token(&mut tokens, "horizontal wall row")?;
        let bits = parse_wall_row(row, N)?;
        owallh[r].copy_from_slice(&bits);
    }

    let walls = WallGrid::new(owallv, owallh);
    Instance::new(agents, walls).map_err(core_error_to_parse_error)
}

fn core_error_to_parse_error(err: CoreError) -> ParseError {
    match err {
        CoreError::NoAgents => ParseError::BadAgentCount { actual: 0, max: maze_core::MAX_K },
        CoreError::TooManyAgents(actual) => ParseError::BadAgentCount { actual, max: maze_core::MAX_K },
        CoreError::OutOfRange { row, col } => ParseError::CoordinateOutOfRange(row as i64 * N as i64 + col as i64),
        CoreError::EdgeOutOfRange { r, c } => ParseError::CoordinateOutOfRange(r as i64 * N as i64 + c as i64),
    }
}

fn next_token<'a>(tokens: &mut impl Iterator<Item = &'a str>, what: &'static str) -> Result<&'a str, ParseError> {
    tokens.next().ok_or(ParseError::UnexpectedEof(what))
}

fn next_int<'a>(tokens: &mut impl Iterator<Item = &'a str>, what: &'static str) -> Result<i64, ParseError> {
    let tok = next_token(tokens, what)?;
    tok.parse().map_err(|_| ParseError::BadInteger(tok.to_string()))
}

fn next_coord<'a>(tokens: &mut impl Iterator<Item = &'a str>, what: &'static str) -> Result<u8, ParseError> {
    let v = next_int(tokens, what)?;
    if v < 0 || v >= N as i64 {
        return Err(ParseError::CoordinateOutOfRange(v));
    }
    Ok(v as u8)
}

fn parse_wall_row(row: &str, expected_len: usize) -> Result<Vec<bool>, ParseError> {
    if row.len() != expected_len || !row.bytes().all(|b| b == b'0' || b == b'1') {
        return Err(ParseError::BadWallRow { expected: expected_len, actual: row.to_string() });
    }
    Ok(row.bytes().map(|b| b == b'1').collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn zero_walls_block() -> String {
        let v_row = "0".repeat(N - 1);
        let h_row = "0".repeat(N);
        let mut s = String::new();
        for _ in 0..N {
            s.push_str(&v_row);
            s.push('\n');
        }
        for _ in 1..N {
            s.push_str(&h_row);
            s.push('\n');
        }
        s
    }

    #[test]
    fn parses_scenario_one_single_agent_in_place() {
        let input = format!("{} {}\n0 0 0 0\n{}", N, 1, zero_walls_block());
        let instance = parse_instance(&input).unwrap();
        assert_eq!(instance.k(), 1);
        assert_eq!(instance.agents[0].src, Pos::new(0, 0));
        assert_eq!(instance.agents[0].dst, Pos::new(0, 0));
    }

    #[test]
    fn rejects_wrong_grid_size() {
        let err = parse_instance("29 1\n0 0 0 0\n").unwrap_err();
        assert!(matches!(err, ParseError::WrongGridSize { expected: 30, actual: 29 }));
    }

    #[test]
    fn rejects_zero_agents() {
        let input = format!("{} 0\n{}", N, zero_walls_block());
        let err = parse_instance(&input).unwrap_err();
        assert!(matches!(err, ParseError::BadAgentCount { actual: 0, .. }));
    }

    #[test]
    fn rejects_malformed_wall_row() {
        let input = format!("{} 1\n0 0 0 0\nabc\n", N);
        let err = parse_instance(&input).unwrap_err();
        assert!(matches!(err, ParseError::BadWallRow { .. }));
    }

    #[test]
    fn parses_original_wall_bit() {
        let mut block = zero_walls_block();
        // Flip the first vertical wall row's leading interior bit.
        block.replace_range(0..1, "1");
        let input = format!("{} 1\n0 0 0 0\n{}", N, block);
        let instance = parse_instance(&input).unwrap();
        assert!(instance.walls.is_original_v(0, 1));
    }
}
