//! Binary graph snapshots.
//!
//! Layout (little endian):
//! `u32` node count, then per node a `u16`-prefixed UTF-8 name and two `f64`
//! (lat, lng); `u32` edge count, then per edge two `u32` node indices and an
//! `f64` distance. Decoding yields a graph with identical node order, edge
//! order and neighbor order.

use crate::error::Result;
use crate::graph::{Edge, Graph};
use crate::point::Point;
use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use std::io::{self, Cursor, Read};

// u16 name length + lat + lng
const MIN_NODE_BYTES: usize = 2 + 8 + 8;
// two u32 indices + distance
const EDGE_BYTES: usize = 4 + 4 + 8;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphSnapshot {
    bytes: Vec<u8>,
}

impl GraphSnapshot {
    pub fn encode(graph: &Graph) -> Result<Self> {
        let mut bytes = Vec::new();

        bytes.write_u32::<LittleEndian>(count_to_u32(graph.node_count())?)?;
        for point in graph.points() {
            write_length_prefixed_string(&mut bytes, point.name())?;
            bytes.write_f64::<LittleEndian>(point.lat())?;
            bytes.write_f64::<LittleEndian>(point.lng())?;
        }

        bytes.write_u32::<LittleEndian>(count_to_u32(graph.edge_count())?)?;
        for edge in graph.edges() {
            bytes.write_u32::<LittleEndian>(count_to_u32(edge.a)?)?;
            bytes.write_u32::<LittleEndian>(count_to_u32(edge.b)?)?;
            bytes.write_f64::<LittleEndian>(edge.distance_km)?;
        }

        Ok(Self { bytes })
    }

    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn decode(&self) -> Result<Graph> {
        let mut cursor = Cursor::new(self.bytes.as_slice());

        let node_count = cursor.read_u32::<LittleEndian>()? as usize;
        let mut points = Vec::with_capacity(node_count.min(remaining(&cursor) / MIN_NODE_BYTES));
        for _ in 0..node_count {
            let name = read_length_prefixed_string(&mut cursor)?;
            let lat = cursor.read_f64::<LittleEndian>()?;
            let lng = cursor.read_f64::<LittleEndian>()?;
            points.push(Point::new(name, lat, lng)?);
        }

        let edge_count = cursor.read_u32::<LittleEndian>()? as usize;
        let mut edges = Vec::with_capacity(edge_count.min(remaining(&cursor) / EDGE_BYTES));
        for _ in 0..edge_count {
            let a = cursor.read_u32::<LittleEndian>()? as usize;
            let b = cursor.read_u32::<LittleEndian>()? as usize;
            let distance_km = cursor.read_f64::<LittleEndian>()?;

            if a == b || a >= node_count || b >= node_count {
                return Err(invalid_data(format!("edge ({a}, {b}) is not valid")).into());
            }
            edges.push(Edge::new(a, b, distance_km));
        }

        if cursor.position() as usize != self.bytes.len() {
            return Err(invalid_data("trailing bytes after edge section".to_string()).into());
        }

        let graph = Graph::from_parts(points, edges)?;
        if graph.edge_count() != edge_count {
            return Err(invalid_data("duplicate edges in snapshot".to_string()).into());
        }

        Ok(graph)
    }
}

/// Counts in the header are untrusted; preallocation is bounded by the bytes left.
fn remaining(cursor: &Cursor<&[u8]>) -> usize {
    let len = cursor.get_ref().len();
    len.saturating_sub(cursor.position() as usize)
}

fn count_to_u32(value: usize) -> io::Result<u32> {
    u32::try_from(value).map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{value} does not fit the snapshot format"),
        )
    })
}

fn invalid_data(message: String) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidData, message)
}

fn write_length_prefixed_string(bytes: &mut Vec<u8>, value: &str) -> io::Result<()> {
    let length = u16::try_from(value.len()).map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("name '{value}' is too long for a snapshot"),
        )
    })?;
    bytes.write_u16::<LittleEndian>(length)?;
    bytes.extend_from_slice(value.as_bytes());
    Ok(())
}

fn read_length_prefixed_string(cursor: &mut Cursor<&[u8]>) -> io::Result<String> {
    let length = cursor.read_u16::<LittleEndian>()? as usize;
    let mut string_bytes = vec![0u8; length];
    cursor.read_exact(&mut string_bytes)?;
    String::from_utf8(string_bytes).map_err(|e| invalid_data(e.to_string()))
}
