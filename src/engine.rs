use crate::{
    config::MazeConfig,
    error::MazeError,
    generators::Generator,
    maze::Maze,
    rng::{MazeRng, RandomSource},
};

/// Builds a `rows x columns` maze with `generator`.
///
/// With `Some(seed)` the result is reproducible; `None` draws a fresh
/// seed from the operating system.
pub fn build(
    generator: Generator,
    rows: u16,
    columns: u16,
    seed: Option<u64>,
) -> Result<Maze, MazeError> {
    let mut rng = MazeRng::from_seed(seed);
    build_with(generator, Maze::new(rows, columns)?, &mut rng)
}

/// Builds the maze described by `config`.
pub fn build_from_config(config: &MazeConfig) -> Result<Maze, MazeError> {
    build(config.generator, config.rows, config.columns, config.seed())
}

/// Runs `generator` on a caller-prepared maze, e.g. one with an observer attached,
/// drawing from any [`RandomSource`].
pub fn build_with<R: RandomSource>(
    generator: Generator,
    mut maze: Maze,
    rng: &mut R,
) -> Result<Maze, MazeError> {
    generator.generate(&mut maze, rng)?;

    #[cfg(debug_assertions)]
    {
        if let Err(e) = crate::verify::verify_perfect_maze(&maze) {
            panic!("{generator} produced a broken maze: {e}");
        }
    }

    tracing::info!(
        %generator,
        rows = maze.rows(),
        columns = maze.columns(),
        goal = ?maze.goal(),
        "maze built"
    );
    Ok(maze)
}
