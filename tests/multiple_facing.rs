use std::{cell::RefCell, collections::HashMap};

use mcfacing::{
    block_data::{BrownMushroomBlock, ChorusPlant, Fire, GlowLichen, OakFence, Tripwire, Vine},
    property::BooleanProperty,
    BlockData, BlockFace, BlockState, FaceSet, GenericBlockState, MultipleFacing,
    MultipleFacingBlock, NonAllowedFace, StateAccess,
};
use strum::IntoEnumIterator;

/// A state that records every access and answers reads with each property's default.
#[derive(Default)]
struct RecordingState {
    values: HashMap<&'static str, bool>,
    reads: RefCell<Vec<&'static str>>,
    writes: Vec<(&'static str, bool)>,
}

impl StateAccess for RecordingState {
    fn get(&self, property: &BooleanProperty) -> bool {
        self.reads.borrow_mut().push(property.name);
        self.values
            .get(property.name)
            .copied()
            .unwrap_or(property.default)
    }

    fn set(&mut self, property: &BooleanProperty, value: bool) {
        self.writes.push((property.name, value));
        self.values.insert(property.name, value);
    }
}

#[test]
fn chorus_plant_allows_all_faces() {
    let plant = ChorusPlant::new();
    assert_eq!(plant.allowed_faces(), FaceSet::ALL);
    assert_eq!(
        plant.allowed_faces().iter().collect::<Vec<_>>(),
        BlockFace::iter().collect::<Vec<_>>()
    );
    assert_eq!(plant.id(), ChorusPlant::ID);
}

#[test]
fn set_then_has_round_trips() {
    let mut plant = ChorusPlant::new();
    for face in plant.allowed_faces() {
        for value in [true, false, true] {
            plant.set_face(face, value).unwrap();
            assert_eq!(plant.has_face(face), Ok(value));
        }
    }
    assert_eq!(plant.faces(), FaceSet::ALL);
}

#[test]
fn faces_are_the_set_allowed_faces_in_order() {
    let mut plant = ChorusPlant::new();
    plant.set_face(BlockFace::Down, true).unwrap();
    plant.set_face(BlockFace::East, true).unwrap();
    plant.set_face(BlockFace::Up, true).unwrap();
    plant.set_face(BlockFace::Up, false).unwrap();
    assert_eq!(
        plant.faces().iter().collect::<Vec<_>>(),
        [BlockFace::East, BlockFace::Down]
    );
    assert!(plant.faces().is_subset(&plant.allowed_faces()));
}

#[test]
fn non_allowed_faces_are_rejected() {
    let mut fire = Fire::new();
    assert_eq!(fire.allowed_faces(), FaceSet::ALL.without(BlockFace::Down));
    assert_eq!(
        fire.has_face(BlockFace::Down),
        Err(NonAllowedFace {
            block: "minecraft:fire",
            face: BlockFace::Down,
        })
    );
    let before = fire.clone();
    assert!(fire.set_face(BlockFace::Down, true).is_err());
    assert_eq!(fire, before);

    let fence = OakFence::new();
    for face in [BlockFace::Up, BlockFace::Down] {
        assert!(fence.has_face(face).is_err());
    }
    assert_eq!(
        fence.allowed_faces(),
        FaceSet::from([
            BlockFace::North,
            BlockFace::East,
            BlockFace::South,
            BlockFace::West
        ])
    );
}

#[test]
fn default_faces_follow_registry_defaults() {
    assert!(ChorusPlant::new().faces().is_empty());
    assert!(Vine::new().faces().is_empty());
    assert_eq!(BrownMushroomBlock::new().faces(), FaceSet::ALL);
}

#[test]
fn delegates_to_injected_state() {
    let mut mushroom = BrownMushroomBlock::from_state(RecordingState::default());
    assert_eq!(mushroom.faces(), FaceSet::ALL);
    assert_eq!(mushroom.state().reads.borrow().len(), 6);

    mushroom.set_face(BlockFace::Up, false).unwrap();
    assert_eq!(mushroom.state().writes, [("up", false)]);
    assert_eq!(mushroom.faces(), FaceSet::ALL.without(BlockFace::Up));

    // the rejected write never reaches the state
    let mut vine = Vine::from_state(RecordingState::default());
    assert!(vine.set_face(BlockFace::Down, true).is_err());
    assert!(vine.state().writes.is_empty());
    assert!(vine.state().reads.borrow().is_empty());
}

#[test]
fn works_on_a_borrowed_state() {
    let mut state: GenericBlockState = "minecraft:tripwire[attached=true]".parse().unwrap();
    {
        let mut tripwire = Tripwire::from_state(&mut state);
        tripwire.set_face(BlockFace::North, true).unwrap();
        tripwire.set_face(BlockFace::South, true).unwrap();
        assert!(tripwire.has_face(BlockFace::Up).is_err());
    }
    assert_eq!(
        state.to_string(),
        "minecraft:tripwire[attached=true,north=true,south=true]"
    );
}

#[test]
fn works_on_nbt() {
    let mut lichen = GlowLichen::<fastnbt::Value>::default();
    lichen.set_face(BlockFace::Down, true).unwrap();
    lichen.set_face(BlockFace::West, true).unwrap();
    assert_eq!(
        lichen.faces(),
        FaceSet::from([BlockFace::West, BlockFace::Down])
    );

    let nbt = lichen.into_state();
    assert_eq!(
        nbt,
        fastnbt::nbt!({
            "Name": "minecraft:glow_lichen",
            "Properties": {
                "down": "true",
                "east": "false",
                "north": "false",
                "south": "false",
                "up": "false",
                "waterlogged": "false",
                "west": "true",
            },
        })
    );
}

#[test]
fn dispatch_by_block_id() {
    let state = GenericBlockState::default_state("minecraft:vine");
    let mut block: MultipleFacingBlock = state.try_into().unwrap();
    assert!(matches!(block, MultipleFacingBlock::Vine(_)));
    assert_eq!(block.id(), "minecraft:vine");

    let faces: &mut dyn MultipleFacing = &mut block;
    faces.set_face(BlockFace::Up, true).unwrap();
    assert_eq!(faces.faces(), FaceSet::from([BlockFace::Up]));
    assert!(faces.has_face(BlockFace::Down).is_err());

    let stone: GenericBlockState = "minecraft:stone".parse().unwrap();
    let rejected: Result<MultipleFacingBlock, _> = stone.clone().try_into();
    assert_eq!(rejected, Err(stone));

    let nbt = fastnbt::Value::default_state("minecraft:fire");
    let fire = MultipleFacingBlock::from_state(nbt).unwrap();
    assert_eq!(fire.allowed_faces().len(), 5);

    for id in MultipleFacingBlock::IDS {
        let block: MultipleFacingBlock = GenericBlockState::default_state(id).try_into().unwrap();
        assert_eq!(block.id(), *id);
        assert!(!block.allowed_faces().is_empty());
    }
}

#[test]
fn polymorphic_over_adapters() {
    let mut blocks: Vec<Box<dyn MultipleFacing>> = vec![
        Box::new(ChorusPlant::new()),
        Box::new(Fire::new()),
        Box::new(OakFence::new()),
    ];
    for block in &mut blocks {
        for face in block.allowed_faces() {
            block.set_face(face, true).unwrap();
        }
        assert_eq!(block.faces(), block.allowed_faces());
    }
}

#[test]
fn nbt_round_trips_over_a_broken_properties_tag() {
    let mut vine = Vine::from_state(fastnbt::nbt!({
        "Name": "minecraft:vine",
        "Properties": "oops",
    }));
    vine.set_face(BlockFace::Up, true).unwrap();
    assert_eq!(vine.has_face(BlockFace::Up), Ok(true));
    assert_eq!(vine.faces(), FaceSet::from([BlockFace::Up]));
}

#[test]
fn nbt_that_is_not_a_compound_keeps_defaults() {
    let mut vine = Vine::from_state(fastnbt::Value::Int(3));
    vine.set_face(BlockFace::Up, true).unwrap();
    assert_eq!(vine.has_face(BlockFace::Up), Ok(false));
    assert_eq!(vine.into_state(), fastnbt::Value::Int(3));
}
