//! The fixed, ordered list of fixtures produced by a full run.

use crate::shapes::ShapeRecipe;

/// Returns the standard catalog: six hand-authored small matrices, then the generated shapes in
/// growing sizes. The order defines the test indices, so appending is the only safe change.
pub fn standard_catalog() -> Vec<ShapeRecipe> {
    let mut recipes = vec![
        ShapeRecipe::known(vec![vec![1, 2], vec![3, 4]], -2, "classic"),
        ShapeRecipe::known(vec![vec![2, 0], vec![0, 3]], 6, "diagonal"),
        ShapeRecipe::known(vec![vec![1, 1], vec![1, 1]], 0, "singular"),
        ShapeRecipe::known(
            vec![vec![1, 2, 3], vec![0, 1, 4], vec![5, 6, 0]],
            1,
            "classic",
        ),
        ShapeRecipe::known(
            vec![vec![1, 0, 0], vec![0, 2, 0], vec![0, 0, 3]],
            6,
            "diagonal",
        ),
        ShapeRecipe::known(
            vec![vec![1, 2, 3], vec![2, 4, 6], vec![3, 5, 7]],
            0,
            "singular",
        ),
    ];

    for size in [4, 5] {
        recipes.extend([
            ShapeRecipe::Diagonal { size },
            ShapeRecipe::Identity { size },
            ShapeRecipe::Triangular { size },
        ]);
    }

    // medium and large sizes
    for size in [10, 20, 30, 50] {
        recipes.extend([
            ShapeRecipe::Diagonal { size },
            ShapeRecipe::Identity { size },
            ShapeRecipe::Singular { size },
            ShapeRecipe::Triangular { size },
        ]);
    }

    for size in [100, 200] {
        recipes.extend([
            ShapeRecipe::Identity { size },
            ShapeRecipe::Diagonal { size },
            ShapeRecipe::Singular { size },
            ShapeRecipe::Triangular { size },
        ]);
    }

    recipes
}
