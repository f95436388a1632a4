//! Word lists used by the description classifier.

/// General English word list, whitespace separated.
///
/// Inflected forms are mostly recovered by suffix stripping, so this lists
/// base forms plus irregular inflections.
pub const ENGLISH_WORDS: &str = "
a able about above abroad absence absent accept according account across act action
active activity actor actual add addition address adult advance advantage advice
affair afraid after afternoon again against age agency agent ago agree agreement
ahead aid aim air alarm alcohol alike alive all allow almost alone along already
also although always am among amount an ancient and angel anger angle angry animal
ankle announce annual another answer ant any anybody anyone anything anyway apart
appear apple apply approach april arch area argue argument arise arm army around
arrange arrival arrive arrow art article artist as ash ashamed aside ask asleep at
attack attempt attend attention attitude attract audience august aunt author
authority autumn available average avoid awake award aware away awful axe baby back
bad badly bag bake baker balance ball band bank bar bare bark barrel base basic
basket bath battle bay be beach bean bear beard beast beat beautiful beauty because
become bed bee beef beer before beg begin beginning behave behind being belief
believe bell belong below belt bench bend beneath benefit berry beside best better
between beyond bicycle big bill bind bird birth bit bite bitter black blade blame
blanket blind block blood blow blue board boat body boil bold bone book boot border
born borrow boss both bottle bottom bough bound bow bowl box boy brain branch brave
bread break breakfast breath breathe brick bridge brief bright bring broad brother
brown brush bucket build building bull bullet burn burst bury bus bush business busy
but butter button buy by cabbage cage cake call calm camel camp can candle cap capital
captain car card care careful carpet carry cart case castle cat catch cattle cause
cave ceiling cell cellar centre century certain chain chair chalk chance change
channel chapter character charge cheap check cheek cheese chest chicken chief child
childhood children chin choice choose church circle citizen city claim class clay
clean clear clever cliff climb clock close cloth clothes cloud club coal coast coat
cock coffee coin cold collar collect college colour color comb combine come comfort
command common company compare complete concern condition confirm connect consider
contain content continue control cook cool copper copy corn corner correct cost
cottage cotton cough could council count country courage course court cousin cover
cow crack craft crash cream create creature credit crew crime crop cross crowd crown
cruel cry cup cupboard cure curious current curtain curve custom cut daily damage
damp dance danger dark date daughter day dead deaf deal dear death debt december
decide decision deep deer defeat defend degree deliver demand deny depend depth
describe desert deserve design desire desk destroy detail develop devil die
different difficult dig dinner direct direction dirt dirty discover discuss disease
dish distance divide do doctor dog dollar domestic door double doubt down dozen drag
draw dream dress drink drive drop drum dry duck due dull during dust duty each eager
ear early earn earth ease east easy eat edge effect effort egg eight either elbow
elder elect electric elephant else empty end enemy energy engine enjoy enough enter
equal escape even evening event ever every evil exact example except exchange excite
excuse exercise exist expect expensive experience explain express eye face fact
factory fail faint fair faith fall false fame family famous far farm farmer fast fat
father fault favour fear feather february feed feel fellow female fence fever few
field fierce fight figure fill film final find fine finger finish fire firm first
fish fit five fix flag flame flat flesh flight float flood floor flour flow flower
fly fold follow food fool foot for force foreign forest forget forgive fork form
former fortune forward four fox frame free freeze fresh friday friend frighten frog
from front fruit full fun funny fur furniture future gain game garden gate gather
general gentle get ghost giant gift girl give glad glass go goat god gold good govern
government grain grand grass grave great green grey grief ground group grow guard
guess guest guide gun habit hair half hall hammer hand handle hang happen happy
harbour hard harm harvest hat hate have hawk he head health heap hear heart heat
heaven heavy height hell help hen her herb here hero hide high hill him his history
hit hold hole holiday hollow holy home honest honey honour hook hope horn horse
hospital host hot hotel hour house how however human hundred hunger hunt hurry hurt
husband i ice idea if ill imagine important in inch include increase indeed industry
influence inform information inside instead instrument insult intend interest into
invent invite iron island it its jacket january jaw jewel job join joke journey joy
judge july jump june just keep kettle key kick kill kind king kiss kitchen knee kneel
knife knock know knowledge lack ladder lady lake lamb lamp land language large last
late laugh law lawyer lay lazy lead leaf lean learn least leather leave left leg lend
length less lesson let letter level library lid lie life lift light like limb limit
line lion lip liquid list listen little live load loaf local lock lonely long look
loose lord lose loss lot loud love low luck lunch lung machine mad main make male man
manner many map march mark market marriage marry mass master match material matter
may meal mean measure meat medicine meet melt member memory mend mental mention
metal middle might mild mile milk mill mind mine minute mirror miss mistake mix model
modern moment monday money monkey month moon moral more morning most mother motion
mountain mouse mouth move much mud murder muscle music must my nail name narrow
nation native nature near neat necessary neck need needle neighbour neither nephew
nerve nest net never new news next nice niece night nine no noble nobody noise none
noon nor north nose not note nothing notice november now number nurse nut oak obey
object ocean october of off offer office officer often oil old on once one only open
operation opinion opposite or orange order ordinary organ other ought our out outside
oven over owe own owner ox page pain paint pair palace pale pan paper parent park part
particular party pass past path patient pattern pay peace pear pen pencil people
pepper perfect perhaps period person pick picture piece pig pigeon pile pin pine pink
pipe pity place plain plan plant plate play pleasant please pleasure plenty plough
plural pocket poem poet point poison pole police polite pool poor popular port
position possible pot potato pound pour powder power practice praise pray prayer
prefer preposition prepare present press pretty prevent price pride priest prince
print prison private prize problem produce program promise proper property protect
proud prove provide public pull pump punish pupil pure purple purpose push put
quality quarrel quarter queen question quick quiet quite rabbit race radio rail rain
raise range rare rat rate rather raw reach read ready real reason receive record red
reduce refuse regard region relation religion remain remember remove rent repair
repeat reply report rest result return reward rice rich ride right ring ripe rise
risk river road roar rock roll roof room root rope rose rough round row royal rub rude
rule run rush sad safe sail salt same sand satisfy saturday save say scale school
science scissors score sea search season seat second secret see seed seem seize
sell send sense sentence separate september serious servant serve set settle seven
several severe sew shade shadow shake shall shame shape share sharp she sheep shelf
shell shelter shine ship shirt shock shoe shoot shop shore short shot should shoulder
shout show shut sick side sight sign silent silk silver simple since sing single
sink sir sister sit situation six size skill skin skirt sky sleep slide slight slip
slope slow small smell smile smoke smooth snake snow so soap social society sock
soft soil soldier solid some somebody someone something sometimes son song soon
sore sorrow sorry sort soul sound soup sour south space spade speak special speech
speed spell spend spider spirit spite split spoil spoon sport spot spread spring
square staff stage stair stamp stand star start state station stay steady steal
steam steel steep stem step stick stiff still sting stir stock stomach stone stop
store storm story straight strange stranger straw stream street strength stretch
strike string strong student study stupid subject succeed success such sudden
suffer sugar suit summer sun sunday supper supply support suppose sure surface
surprise swallow swear sweep sweet swell swim swing sword system table tail tailor
take talk tall taste tax tea teach teacher team tear telephone tell temper ten tend
tent term terrible test than thank that the theatre their them then there these they
thick thief thin thing think third thirst this thorn those though thought thousand
thread threat three throat through throw thumb thunder thursday thus ticket tide tie
tiger tight till time tin tip tire title to tobacco today toe together tomorrow
tongue tonight too tool tooth top total touch tough towards tower town toy track
trade train travel tree tremble trial tribe trick trouble trousers true trust truth
try tube tuesday tune turn twelve twenty twice twist two type ugly uncle under
understand union unit unite universe unless until up upon upper upset urge us use
useful usual usually valley value various vegetable very vessel victory view
village violent visit voice vote voyage wage wagon waist wait wake walk wall wander
want war warm warn wash waste watch water wave wax way we weak wealth weapon wear
weather wedding wednesday week weigh weight welcome well west wet what wheat wheel
when where whether which while whip whisper whistle white who whole why wicked wide
widow width wife wild will win wind window wine wing winter wire wise wish with
within without witness wolf woman wonder wood wool word work world worm worry worse
worship worst worth would wound wrap wreck wrist write wrong yard year yellow yes
yesterday yet you young youth zero
alphabet adjective adverb noun verb pronoun sentence grammar meaning synonym
feminine masculine neuter singular tense phrase prefix suffix syllable vowel
consonant spelling dialect slang formal informal colloquial archaic obsolete poetic
literary vulgar humorous derogatory dated historical rare nautical military
medicine science mathematics physics chemistry biology botany zoology music sport
computer software internet website email phone camera engine
realize organize organization
went gone been was were did done had has saw seen ate eaten gave given took taken
ran came became began begun broke broken brought built bought caught chose chosen
drew drawn drank drunk drove driven fell fallen felt fought found flew flown forgot
forgotten froze frozen got gotten grew grown heard held hid hidden hung kept knew
known laid led left lent lost made meant met paid rode ridden rang rung rose risen
said sold sent shook shaken shot shut sang sung sank sunk sat slept spoke spoken
spent stood stole stolen struck swam swum taught tore torn told thought threw thrown
understood woke woken wore worn won wrote written men women children feet teeth
mice geese lice oxen people better best worse worst
";

/// Tokens that look English but should not count as English.
pub const NOT_ENGLISH_WORDS: &[&str] = &["a.", "b.", "c.", "d.", "e.", "ii", "iii", "iv", "vi"];

/// Exact binomial names recognized as taxonomic.
pub const KNOWN_SPECIES: &[&str] = &[
    "Arabidopsis thaliana",
    "Bos taurus",
    "Canis familiaris",
    "Canis lupus",
    "Drosophila melanogaster",
    "Equus caballus",
    "Escherichia coli",
    "Felis catus",
    "Homo sapiens",
    "Mus musculus",
    "Passer domesticus",
    "Quercus robur",
];

/// Genera and higher taxa that may start a taxonomic name.
pub const KNOWN_FIRSTS: &[&str] = &[
    "Acer",
    "Animalia",
    "Apis",
    "Arabidopsis",
    "Arthropoda",
    "Aves",
    "Bos",
    "Canidae",
    "Canis",
    "Capra",
    "Carnivora",
    "Chordata",
    "Citrus",
    "Coleoptera",
    "Corvus",
    "Diptera",
    "Drosophila",
    "Equus",
    "Escherichia",
    "Fabaceae",
    "Felidae",
    "Felis",
    "Fungi",
    "Hominidae",
    "Homo",
    "Hymenoptera",
    "Insecta",
    "Lepidoptera",
    "Malus",
    "Mammalia",
    "Mus",
    "Oryza",
    "Ovis",
    "Panthera",
    "Passer",
    "Passeriformes",
    "Pinus",
    "Plantae",
    "Poaceae",
    "Primates",
    "Prunus",
    "Quercus",
    "Rattus",
    "Reptilia",
    "Rodentia",
    "Rosa",
    "Rosaceae",
    "Saccharomyces",
    "Salmo",
    "Solanum",
    "Sus",
    "Triticum",
    "Ursus",
    "Vitis",
    "Zea",
];
