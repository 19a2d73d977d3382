use std::collections::HashSet;
use std::io::Write;

use anyhow::Context;
use serde_json::json;

use crate::align::structs::{Alignment, Coord, ScoreGrid, Trace};

pub type JsonVec = Vec<serde_json::Value>;

impl ScoreGrid {
    /// One record per cell, flagged when the cell lies on the traceback path.
    pub fn json(&self, trace: &Trace) -> JsonVec {
        let on_path: HashSet<Coord> = trace.path.iter().copied().collect();
        let mut vec: JsonVec = vec![];

        for row in 0..self.rows() {
            for col in 0..self.cols() {
                vec.push(json!({
                    "id": format!("cell-{}-{}", row, col),
                    "row": row,
                    "col": col,
                    "score": self.get(row, col),
                    "on_path": on_path.contains(&(row, col)),
                }));
            }
        }
        vec
    }
}

impl Alignment {
    pub fn json(&self) -> serde_json::Value {
        json!({
            "aligned_1": self.aligned_1,
            "marker_line": self.marker_line,
            "aligned_2": self.aligned_2,
            "score": self.score,
            "match_count": self.match_count,
            "length": self.length,
            "similarity": self.similarity,
            "steps": self.trace.to_string(),
            "path": self.trace.path,
            "grid": self.grid,
            "cells": self.grid.json(&self.trace),
        })
    }

    pub fn write_json(&self, writer: &mut impl Write) -> anyhow::Result<()> {
        serde_json::to_writer_pretty(&mut *writer, &self.json())
            .context("failed to serialize alignment")?;
        writeln!(writer).context("failed to write alignment")?;
        Ok(())
    }
}
